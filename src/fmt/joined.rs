use std::fmt;

/// Renders several values separated by single spaces, the way `println`-style
/// loggers join their operands.
///
/// ```
/// use levlog::fmt::Joined;
///
/// assert_eq!(Joined(&[&"code", &5, &true]).to_string(), "code 5 true");
/// ```
#[derive(Clone, Copy)]
pub struct Joined<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Joined({self})")
    }
}
