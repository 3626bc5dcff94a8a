/// Port for user-facing progress output.
pub trait Reporter {
    fn header(&mut self, title: &str);

    /// Announce stage `index` (1-based).
    fn stage(&mut self, index: usize, title: &str);

    fn success(&mut self, message: &str);

    fn info(&mut self, message: &str);

    fn warning(&mut self, message: &str);

    fn error(&mut self, message: &str);

    /// Two-column table of resolved settings.
    fn summary(&mut self, title: &str, rows: &[(String, String)]);
}
