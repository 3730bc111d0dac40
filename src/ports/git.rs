//! Git port for version-control history queries.

/// Runs `git` with an argument list and returns its standard output.
///
/// Every history query of the pipeline (log, diff, config, checkout) goes
/// through this single entry point, which lets tests script or replay the
/// exact outputs a repository would produce.
pub trait GitRepo: Send + Sync {
    /// Runs `git <args>` and returns the captured standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exits non-zero.
    /// The message carries the command line and the process output.
    fn run(&self, args: &[&str]) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
