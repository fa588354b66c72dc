use crate::utils::error::Result;

/// Line-oriented destination for everything the script prints.
pub trait OutputSink {
    fn emit(&mut self, line: &str) -> Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, line: &str) -> Result<()> {
        (**self).emit(line)
    }
}
