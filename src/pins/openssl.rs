use crate::error::{Error, Result};
use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};
use tracing::debug;

/// Handle on the `openssl` command-line tool.
#[derive(Debug, Clone)]
pub struct Openssl {
    program: PathBuf,
}

impl Openssl {
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }

    /// Dumps the certificate chain served by `host:port`, as printed by
    /// `openssl s_client -showcerts`.
    pub fn show_certs(&self, host: &str, port: u16) -> Result<String> {
        let connect = format!("{host}:{port}");
        self.run(
            &[
                "s_client",
                "-servername",
                host,
                "-connect",
                &connect,
                "-showcerts",
            ],
            None,
        )
    }

    /// PEM `PUBLIC KEY` block of one PEM certificate.
    pub fn public_key(&self, cert_pem: &str) -> Result<String> {
        let input = format!("{cert_pem}\n");
        self.run(&["x509", "-pubkey", "-noout"], Some(&input))
    }

    // stdin is always closed so s_client disconnects instead of waiting on input
    fn run(&self, args: &[&str], input: Option<&str>) -> Result<String> {
        let program = self.program.display().to_string();
        debug!(program = %program, args = ?args, "running openssl");

        let exec_err = |source: std::io::Error| Error::Exec {
            program: program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(exec_err)?;

        if let Some(mut stdin) = child.stdin.take()
            && let Some(input) = input
        {
            stdin.write_all(input.as_bytes()).map_err(exec_err)?;
        }

        let output = child.wait_with_output().map_err(exec_err)?;
        if !output.status.success() {
            return Err(Error::Status {
                program,
                command: args.join(" "),
                status: output.status,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
