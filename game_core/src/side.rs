use thiserror::Error;

/// Which half of the playfield a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Errors encountered when making a [`Side`] out of a raw serve direction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SideError {
    #[error("serve direction must be -1 (left) or +1 (right), got `{0}`")]
    InvalidDirection(i8),
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction of travel toward this side
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

impl TryFrom<i8> for Side {
    type Error = SideError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Side::Left),
            1 => Ok(Side::Right),
            n => Err(SideError::InvalidDirection(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_matches_travel_direction() {
        assert_eq!(Side::Left.sign(), -1.0);
        assert_eq!(Side::Right.sign(), 1.0);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn test_valid_directions_convert() {
        assert_eq!(Side::try_from(-1i8), Ok(Side::Left));
        assert_eq!(Side::try_from(1i8), Ok(Side::Right));
    }

    #[test]
    fn test_invalid_directions_are_rejected() {
        assert_eq!(Side::try_from(0i8), Err(SideError::InvalidDirection(0)));
        assert_eq!(Side::try_from(2i8), Err(SideError::InvalidDirection(2)));
        assert_eq!(
            Side::try_from(-5i8),
            Err(SideError::InvalidDirection(-5)),
            "only the two unit directions are serve directions"
        );
    }
}
