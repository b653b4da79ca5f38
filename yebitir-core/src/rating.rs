//! Star rendering for a 0–5 rating.

use std::fmt;

pub const TOTAL_STARS: u8 = 5;

/// Fractional parts in this range draw a half star; outside it the rating
/// rounds visually down to the full stars.
const HALF_STAR_RANGE: std::ops::Range<f64> = 0.3..0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarBreakdown {
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, f64::from(TOTAL_STARS))
        };
        let full = rating.floor() as u8;
        let half = full < TOTAL_STARS && HALF_STAR_RANGE.contains(&rating.fract());
        let empty = TOTAL_STARS - full - u8::from(half);
        Self { full, half, empty }
    }
}

impl fmt::Display for StarBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.full {
            f.write_str("★")?;
        }
        if self.half {
            f.write_str("⯪")?;
        }
        for _ in 0..self.empty {
            f.write_str("☆")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_star_threshold() {
        assert_eq!(
            StarBreakdown::from_rating(4.2),
            StarBreakdown { full: 4, half: false, empty: 1 }
        );
        assert_eq!(
            StarBreakdown::from_rating(4.35),
            StarBreakdown { full: 4, half: true, empty: 0 }
        );
        assert_eq!(
            StarBreakdown::from_rating(3.79),
            StarBreakdown { full: 3, half: true, empty: 1 }
        );
        assert_eq!(
            StarBreakdown::from_rating(3.85),
            StarBreakdown { full: 3, half: false, empty: 2 }
        );
    }

    #[test]
    fn test_out_of_range_ratings() {
        assert_eq!(StarBreakdown::from_rating(9.0).full, 5);
        assert_eq!(StarBreakdown::from_rating(-2.0).empty, 5);
        assert_eq!(StarBreakdown::from_rating(f64::NAN).empty, 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(StarBreakdown::from_rating(2.5).to_string(), "★★⯪☆☆");
    }
}
