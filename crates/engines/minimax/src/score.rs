use std::fmt;
use std::ops::Neg;

/// Position score. Totally ordered; the two infinities bound every score an
/// evaluator can produce and are only used to open search windows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(pub i32);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const INFINITY: Score = Score(i32::MAX);
    /// Symmetric with `INFINITY` so negation never overflows.
    pub const NEG_INFINITY: Score = Score(-i32::MAX);

    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Score {
    fn from(v: i32) -> Self {
        Score(v)
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        Score(-self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Score::INFINITY => write!(f, "+inf"),
            Score::NEG_INFINITY => write!(f, "-inf"),
            Score(v) => write!(f, "{v}"),
        }
    }
}
