use super::Trail;
use crate::types::composed::Composed;
use std::error::Error;
use std::fmt::{self, Debug, Display};

impl Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.underlying, f)
    }
}

impl Debug for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trail")
            .field("message", &self.underlying.to_string())
            .field("frames", &self.frames)
            .finish()
    }
}

impl Error for Trail {
    /// The original error. The internal layer that carries composed
    /// prefix/suffix text is skipped.
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.underlying.downcast_ref::<Composed>() {
            Some(composed) => Some(composed.source_ref()),
            None => Some(&*self.underlying),
        }
    }
}

impl PartialEq for Trail {
    /// Structural equality: same frames and same display text. The type of
    /// the underlying error is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.frames == other.frames && self.underlying.to_string() == other.underlying.to_string()
    }
}
