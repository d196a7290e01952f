use camino::Utf8PathBuf;
use camino_tempfile_ext::camino_tempfile::Utf8TempDir;
use std::{
    collections::HashMap,
    io::Write,
    process::{Command, Stdio},
};

pub struct FlexverTest {
    pub temp_dir: Utf8TempDir,
    pub cwd: Utf8PathBuf,
    pub env: HashMap<String, String>,
}

impl FlexverTest {
    pub fn new() -> Self {
        let temp_dir = Utf8TempDir::new().expect("Failed to create temporary directory");
        let cwd = temp_dir.path().into();

        Self {
            temp_dir,
            cwd,
            env: HashMap::new(),
        }
    }

    pub fn flexver(&self, args: &[&str]) -> FlexverOutput {
        let mut cmd = self.flexver_command();
        cmd.args(args);

        let output = cmd.output().expect("Failed to execute flexver command");
        FlexverOutput::new(output)
    }

    pub fn flexver_with_stdin(&self, args: &[&str], stdin: &str) -> FlexverOutput {
        let mut cmd = self.flexver_command();
        cmd.args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to spawn flexver command");
        child
            .stdin
            .take()
            .expect("Failed to open stdin")
            .write_all(stdin.as_bytes())
            .expect("Failed to write to stdin");

        let output = child
            .wait_with_output()
            .expect("Failed to wait for flexver command");
        FlexverOutput::new(output)
    }

    pub fn flexver_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_flexver"));
        cmd.current_dir(&self.cwd);
        cmd.env_clear().envs(&self.env);
        cmd
    }

    /// Writes a file relative to the test's working directory.
    pub fn write_file(&self, name: &str, content: &str) -> Utf8PathBuf {
        let path = self.cwd.join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

pub struct FlexverOutput {
    pub output: std::process::Output,
}

impl FlexverOutput {
    pub fn new(output: std::process::Output) -> Self {
        Self { output }
    }

    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    #[track_caller]
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success(),
            "Expected command to succeed, got {:#?}",
            self.output
        );
        self
    }

    #[track_caller]
    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.success(),
            "Expected command to fail, got {:#?}",
            self.output
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }
}
