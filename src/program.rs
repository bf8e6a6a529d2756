use crate::error::ProgramError;
use std::{
    env,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
    process::{Command, Stdio},
    thread,
};
use tracing::{debug, info, warn};

/// A line callback for [`Program::execute`].
pub type LineCallback<'a> = &'a mut (dyn FnMut(&str) + Send);

/// An external program, such as `git`, invoked by name.
///
/// ```no_run
/// use verstamp::Program;
///
/// let git = Program::new("git", Some("Git")).unwrap();
/// if git.exists(false).unwrap() && git.runnable(false, &[]).unwrap() {
///     let mut tags = Vec::new();
///     let code = git
///         .execute(&["tag", "--list"], Some(&mut |line: &str| tags.push(line.to_owned())), None)
///         .unwrap();
///     assert_eq!(0, code);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    command: String,
    name: String,
}

impl Program {
    /// Arguments used by [`Program::runnable`] when none are given.
    pub const DEFAULT_PROBE_ARGS: &'static [&'static str] = &["--version"];

    /// Creates a program run as `command`. `name` is its formal name in messages, and defaults to
    /// `command`.
    ///
    /// # Errors
    ///
    /// - Returns [`ProgramError::InvalidArgument`] if `command` is empty.
    pub fn new(command: impl Into<String>, name: Option<&str>) -> Result<Self, ProgramError> {
        let command = command.into();
        if command.trim().is_empty() {
            return Err(ProgramError::InvalidArgument);
        }
        let name = name.map_or_else(|| command.clone(), str::to_owned);
        Ok(Self { command, name })
    }

    /// The command, as typed on a terminal.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The formal name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the command resolves to a file, either directly when it holds a path
    /// separator or through the `PATH` directories.
    ///
    /// # Errors
    ///
    /// - Returns [`ProgramError::NotFound`] if `required` and the program does not exist.
    pub fn exists(&self, required: bool) -> Result<bool, ProgramError> {
        let found = self.locate().is_some();
        debug!(command = %self.command, found, "looked up program");
        if required && !found {
            return Err(ProgramError::NotFound {
                name: self.name.clone(),
                command: self.command.clone(),
            });
        }
        Ok(found)
    }

    fn locate(&self) -> Option<PathBuf> {
        let command = Path::new(&self.command);
        if command.components().count() > 1 {
            return command.is_file().then(|| command.to_owned());
        }

        let paths = env::var_os("PATH")?;
        env::split_paths(&paths).find_map(|dir| {
            candidates(&self.command)
                .map(|file| dir.join(file))
                .find(|path| path.is_file())
        })
    }

    /// Runs the program with `args` (or [`Program::DEFAULT_PROBE_ARGS`] if empty), discarding its
    /// output, and returns whether it exited successfully. A program that cannot be started is
    /// not runnable.
    ///
    /// # Errors
    ///
    /// - Returns [`ProgramError::NotRunnable`] if `required` and the program is not runnable.
    pub fn runnable(&self, required: bool, args: &[&str]) -> Result<bool, ProgramError> {
        let args = if args.is_empty() {
            Self::DEFAULT_PROBE_ARGS
        } else {
            args
        };
        let ok = Command::new(&self.command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success());

        debug!(command = %self.command, ?args, ok, "probed program");
        if required && !ok {
            return Err(ProgramError::NotRunnable {
                name: self.name.clone(),
                command: self.command.clone(),
            });
        }
        Ok(ok)
    }

    /// Runs the program with `args` and returns its exit code (`-1` if it was killed by a
    /// signal).
    ///
    /// Standard output and standard error are each read line by line on their own thread, and
    /// every line is handed to the matching callback. Without a callback, stdout lines are logged
    /// at info level and stderr lines at warn level. Both readers finish before this returns.
    ///
    /// # Errors
    ///
    /// - Returns [`ProgramError::Io`] if the process could not be spawned or waited on.
    pub fn execute(
        &self,
        args: &[&str],
        on_stdout: Option<LineCallback<'_>>,
        on_stderr: Option<LineCallback<'_>>,
    ) -> Result<i32, ProgramError> {
        info!(program = %self.name, ?args, "executing");
        let mut child = Command::new(&self.command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let name = self.name.as_str();

        thread::scope(|scope| {
            if let Some(pipe) = stdout {
                scope.spawn(move || {
                    forward_lines(pipe, on_stdout, |line| info!(program = name, "{line}"))
                });
            }
            if let Some(pipe) = stderr {
                scope.spawn(move || {
                    forward_lines(pipe, on_stderr, |line| warn!(program = name, "{line}"))
                });
            }
        });

        let status = child.wait()?;
        let code = status.code().unwrap_or(-1);
        debug!(program = %self.name, code, "exited");
        Ok(code)
    }
}

fn forward_lines(pipe: impl Read, callback: Option<LineCallback<'_>>, fallback: impl Fn(&str)) {
    let lines = BufReader::new(pipe).lines().map_while(Result::ok);
    match callback {
        Some(callback) => lines.for_each(|line| callback(&line)),
        None => lines.for_each(|line| fallback(&line)),
    }
}

/// File names `command` may have on disk.
fn candidates(command: &str) -> impl Iterator<Item = String> + '_ {
    let extensions: &[&str] = if cfg!(windows) {
        &["", ".exe", ".cmd", ".bat"]
    } else {
        &[""]
    };
    extensions.iter().map(move |ext| format!("{command}{ext}"))
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
