//! Unit tests for park-config.

#[cfg(test)]
mod map {
    use std::io::{Cursor, Write};

    use park_agents::RideKind;
    use park_core::Point;

    use crate::{ConfigError, load_map, load_map_reader};

    const MAP: &[u8] = b"\
# kind,x,y,param1,param2,capacity,duration,name\n\
FerrisWheel,50,150,20,0,8,80,Big Wheel\n\
\n\
PirateShip, 150 , 50 ,30,0,10,50\n\
BumperCars,50,50,40,35,8,70,\n\
RollerCoaster,150,150,20,60,6,60,Tower Drop,extra\n\
";

    #[test]
    fn loads_all_rows() {
        let rides = load_map_reader(Cursor::new(MAP)).unwrap();
        assert_eq!(rides.len(), 4);
        let kinds: Vec<RideKind> = rides.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, RideKind::ALL.to_vec());
    }

    #[test]
    fn fields_are_trimmed_and_parsed() {
        let rides = load_map_reader(Cursor::new(MAP)).unwrap();
        let ship = &rides[1];
        assert_eq!(ship.center, Point::new(150.0, 50.0));
        assert_eq!(ship.param1, 30.0);
        assert_eq!(ship.capacity, 10);
        assert_eq!(ship.duration, 50);
    }

    #[test]
    fn missing_or_empty_name_falls_back_to_kind() {
        let rides = load_map_reader(Cursor::new(MAP)).unwrap();
        assert_eq!(rides[0].display_name(), "Big Wheel");
        assert_eq!(rides[1].name, None);
        assert_eq!(rides[1].display_name(), "Pirate Ship");
        assert_eq!(rides[2].name, None);
        assert_eq!(rides[3].display_name(), "Tower Drop");
    }

    #[test]
    fn unknown_kind_reports_line() {
        let bad = b"FerrisWheel,50,150,20,0,8,80\nCarousel,10,10,5,5,4,20\n";
        let err = load_map_reader(Cursor::new(&bad[..])).unwrap_err();
        assert!(matches!(err, ConfigError::Ride { line: 2, .. }), "{err}");
        assert!(err.to_string().contains("Carousel"));
    }

    #[test]
    fn bad_number_reports_line() {
        let bad = b"# header\nBumperCars,50,fifty,40,35,8,70\n";
        let err = load_map_reader(Cursor::new(&bad[..])).unwrap_err();
        assert!(matches!(err, ConfigError::Line { line: 2, .. }), "{err}");
    }

    #[test]
    fn seven_column_row_loads_without_name() {
        let rides = load_map_reader(Cursor::new(b"PirateShip,150,50,30,0,10,50\n")).unwrap();
        assert_eq!(rides.len(), 1);
        assert_eq!(rides[0].kind, RideKind::PirateShip);
        assert_eq!(rides[0].name, None);
        assert_eq!(rides[0].capacity, 10);
        assert_eq!(rides[0].duration, 50);
    }

    #[test]
    fn line_numbers_count_comments_and_blank_lines() {
        let bad = b"# layout\n\n# kind,x,y,...\nFerrisWheel,50,150,20,0,8,80\n\nBumperCars,50,fifty,40,35,8,70,A\n";
        let err = load_map_reader(Cursor::new(&bad[..])).unwrap_err();
        assert!(matches!(err, ConfigError::Line { line: 6, .. }), "{err}");

        let bad = b"  # indented comment\nBumperCars,50,50,40,35,0,70\n";
        let err = load_map_reader(Cursor::new(&bad[..])).unwrap_err();
        assert!(matches!(err, ConfigError::Ride { line: 2, .. }), "{err}");
    }

    #[test]
    fn missing_column_reports_line() {
        let bad = b"BumperCars,50,50,40,35,8\n";
        let err = load_map_reader(Cursor::new(&bad[..])).unwrap_err();
        assert!(matches!(err, ConfigError::Line { line: 1, .. }), "{err}");
    }

    #[test]
    fn zero_capacity_rejected_with_line() {
        let bad = b"BumperCars,50,50,40,35,8,70\nBumperCars,150,50,40,35,0,70\n";
        let err = load_map_reader(Cursor::new(&bad[..])).unwrap_err();
        assert!(matches!(err, ConfigError::Ride { line: 2, .. }), "{err}");
    }

    #[test]
    fn empty_file_is_empty_layout() {
        let rides = load_map_reader(Cursor::new(b"# nothing here\n")).unwrap();
        assert!(rides.is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MAP).unwrap();
        let rides = load_map(file.path()).unwrap();
        assert_eq!(rides.len(), 4);
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_map.csv");
        let err = load_map(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Open { .. }));
        assert!(err.to_string().contains("no_such_map.csv"));
    }
}

#[cfg(test)]
mod params {
    use std::io::Cursor;

    use park_core::ParkConfig;

    use crate::{ConfigError, load_params_reader};

    #[test]
    fn recognised_keys_override_defaults() {
        let csv = b"park_width,300\npark_height,250.5\nmax_timesteps,1000\ninitial_patrons,4\nseed,42\n";
        let config = load_params_reader(Cursor::new(&csv[..])).unwrap();
        assert_eq!(config.width, 300.0);
        assert_eq!(config.height, 250.5);
        assert_eq!(config.max_ticks, 1000);
        assert_eq!(config.initial_patrons, 4);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn absent_keys_keep_defaults() {
        let config = load_params_reader(Cursor::new(b"# only a comment\n")).unwrap();
        assert_eq!(config, ParkConfig::default());
    }

    #[test]
    fn unknown_keys_ignored() {
        let csv = b"max_timesteps,50\nweather,sunny\n";
        let config = load_params_reader(Cursor::new(&csv[..])).unwrap();
        assert_eq!(config.max_ticks, 50);
    }

    #[test]
    fn invalid_value_reports_line() {
        let csv = b"park_width,200\ninitial_patrons,ten\n";
        let err = load_params_reader(Cursor::new(&csv[..])).unwrap_err();
        assert!(matches!(err, ConfigError::Line { line: 2, .. }), "{err}");
        assert!(err.to_string().contains("initial_patrons"));
    }

    #[test]
    fn invalid_value_after_comments_reports_line() {
        let csv = b"# run parameters\n\nseed,abc\n";
        let err = load_params_reader(Cursor::new(&csv[..])).unwrap_err();
        assert!(matches!(err, ConfigError::Line { line: 3, .. }), "{err}");
    }

    #[test]
    fn missing_value_reports_line() {
        let err = load_params_reader(Cursor::new(b"park_width\n")).unwrap_err();
        assert!(matches!(err, ConfigError::Line { line: 1, .. }), "{err}");
    }

    #[test]
    fn non_positive_dimension_rejected() {
        let err = load_params_reader(Cursor::new(b"park_height,0\n")).unwrap_err();
        assert!(matches!(err, ConfigError::Core(_)));
    }
}

#[cfg(test)]
mod defaults {
    use park_agents::{Ride, RideKind};
    use park_core::{Point, RideId};

    use crate::default_rides;

    #[test]
    fn one_of_each_kind() {
        let rides = default_rides();
        assert_eq!(rides.len(), 4);
        for kind in RideKind::ALL {
            assert_eq!(rides.iter().filter(|r| r.kind == kind).count(), 1);
        }
        assert_eq!(rides[0].center, Point::new(50.0, 150.0));
        assert_eq!(rides[3].capacity, 6);
    }

    #[test]
    fn default_layout_is_valid_and_disjoint() {
        let rides: Vec<Ride> = default_rides()
            .into_iter()
            .enumerate()
            .map(|(i, spec)| Ride::new(RideId(i as u32), spec).unwrap())
            .collect();
        for (i, a) in rides.iter().enumerate() {
            for b in &rides[i + 1..] {
                assert!(!a.overlaps(b), "{} overlaps {}", a.name, b.name);
            }
        }
    }
}
