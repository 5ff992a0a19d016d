use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Slack bound for a latitude magnitude before the hemisphere sign is
/// applied. Anything above this is corrupt tag data, not a coordinate.
pub const LATITUDE_SLACK_DEGREES: f64 = 100.0;

/// Slack bound for a longitude magnitude before the hemisphere sign is
/// applied.
pub const LONGITUDE_SLACK_DEGREES: f64 = 190.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedRational {
    pub numerator: u32,
    pub denominator: u32,
}

impl UnsignedRational {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn to_f64(self) -> Result<f64, DomainError> {
        if self.denominator == 0 {
            return Err(DomainError::ZeroDenominator {
                numerator: self.numerator,
            });
        }
        Ok(f64::from(self.numerator) / f64::from(self.denominator))
    }
}

/// An angle magnitude in degrees, minutes and seconds. The degree
/// component is itself rational and need not be integral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmsAngle {
    pub degrees: UnsignedRational,
    pub minutes: UnsignedRational,
    pub seconds: UnsignedRational,
}

impl DmsAngle {
    pub fn new(
        degrees: UnsignedRational,
        minutes: UnsignedRational,
        seconds: UnsignedRational,
    ) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    pub fn decimal_degrees(&self) -> Result<f64, DomainError> {
        Ok(self.degrees.to_f64()? + self.minutes.to_f64()? / 60.0 + self.seconds.to_f64()? / 3600.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatitudeRef {
    North,
    South,
}

impl LatitudeRef {
    pub fn from_gps_ref(value: &str) -> Option<Self> {
        match value.trim() {
            "N" | "n" => Some(Self::North),
            "S" | "s" => Some(Self::South),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LongitudeRef {
    East,
    West,
}

impl LongitudeRef {
    pub fn from_gps_ref(value: &str) -> Option<Self> {
        match value.trim() {
            "E" | "e" => Some(Self::East),
            "W" | "w" => Some(Self::West),
            _ => None,
        }
    }
}

pub fn decimal_latitude(
    angle: &DmsAngle,
    hemisphere: LatitudeRef,
) -> Result<Option<f64>, DomainError> {
    let magnitude = angle.decimal_degrees()?;
    if magnitude > LATITUDE_SLACK_DEGREES {
        return Ok(None);
    }
    Ok(Some(match hemisphere {
        LatitudeRef::North => magnitude,
        LatitudeRef::South => -magnitude,
    }))
}

pub fn decimal_longitude(
    angle: &DmsAngle,
    hemisphere: LongitudeRef,
) -> Result<Option<f64>, DomainError> {
    let magnitude = angle.decimal_degrees()?;
    if magnitude > LONGITUDE_SLACK_DEGREES {
        return Ok(None);
    }
    Ok(Some(match hemisphere {
        LongitudeRef::East => magnitude,
        LongitudeRef::West => -magnitude,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dms(degrees: (u32, u32), minutes: (u32, u32), seconds: (u32, u32)) -> DmsAngle {
        DmsAngle::new(
            UnsignedRational::new(degrees.0, degrees.1),
            UnsignedRational::new(minutes.0, minutes.1),
            UnsignedRational::new(seconds.0, seconds.1),
        )
    }

    #[test]
    fn converts_whole_dms_to_decimal_degrees() {
        let angle = dms((40, 1), (26, 1), (46, 1));
        let decimal = angle.decimal_degrees().expect("finite rationals");
        assert!((decimal - 40.446111111111).abs() < 1e-9);
    }

    #[test]
    fn degree_component_may_be_fractional() {
        let angle = dms((4053, 100), (0, 1), (0, 1));
        let decimal = angle.decimal_degrees().expect("finite rationals");
        assert!((decimal - 40.53).abs() < 1e-9);
    }

    #[test]
    fn north_latitude_matches_known_scenario() {
        let angle = dms((40, 1), (26, 1), (46, 1));
        let latitude = decimal_latitude(&angle, LatitudeRef::North)
            .expect("finite rationals")
            .expect("within bounds");
        assert!((latitude - 40.44611).abs() < 1e-5);
    }

    #[test]
    fn west_longitude_matches_known_scenario() {
        let angle = dms((79, 1), (58, 1), (0, 1));
        let longitude = decimal_longitude(&angle, LongitudeRef::West)
            .expect("finite rationals")
            .expect("within bounds");
        assert!((longitude - -79.96667).abs() < 1e-5);
    }

    #[test]
    fn south_and_west_mirror_north_and_east() {
        let angle = dms((12, 1), (30, 1), (15, 2));
        let north = decimal_latitude(&angle, LatitudeRef::North)
            .expect("finite rationals")
            .expect("within bounds");
        let south = decimal_latitude(&angle, LatitudeRef::South)
            .expect("finite rationals")
            .expect("within bounds");
        assert_eq!(north, -south);

        let east = decimal_longitude(&angle, LongitudeRef::East)
            .expect("finite rationals")
            .expect("within bounds");
        let west = decimal_longitude(&angle, LongitudeRef::West)
            .expect("finite rationals")
            .expect("within bounds");
        assert_eq!(east, -west);
    }

    #[test]
    fn latitude_above_slack_bound_is_absent() {
        let angle = dms((120, 1), (0, 1), (0, 1));
        let latitude = decimal_latitude(&angle, LatitudeRef::South).expect("finite rationals");
        assert_eq!(latitude, None);
    }

    #[test]
    fn longitude_above_slack_bound_is_absent() {
        let angle = dms((200, 1), (0, 1), (0, 1));
        let longitude = decimal_longitude(&angle, LongitudeRef::West).expect("finite rationals");
        assert_eq!(longitude, None);

        // 190 itself is still tolerated by the slack bound.
        let edge = dms((190, 1), (0, 1), (0, 1));
        let longitude = decimal_longitude(&edge, LongitudeRef::East).expect("finite rationals");
        assert_eq!(longitude, Some(190.0));
    }

    #[test]
    fn zero_denominator_is_a_domain_error() {
        let angle = dms((40, 1), (26, 0), (46, 1));
        assert!(matches!(
            angle.decimal_degrees(),
            Err(DomainError::ZeroDenominator { numerator: 26 })
        ));
        assert!(matches!(
            decimal_latitude(&angle, LatitudeRef::North),
            Err(DomainError::ZeroDenominator { .. })
        ));
    }

    #[test]
    fn gps_ref_parsing_is_case_insensitive() {
        assert_eq!(LatitudeRef::from_gps_ref("N"), Some(LatitudeRef::North));
        assert_eq!(LatitudeRef::from_gps_ref("s"), Some(LatitudeRef::South));
        assert_eq!(LongitudeRef::from_gps_ref("e"), Some(LongitudeRef::East));
        assert_eq!(LongitudeRef::from_gps_ref("W"), Some(LongitudeRef::West));
        assert_eq!(LatitudeRef::from_gps_ref("E"), None);
        assert_eq!(LongitudeRef::from_gps_ref(""), None);
    }
}
