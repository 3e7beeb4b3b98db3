use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::service::traits::i_service::{ProcessOutput, ProcessRunnerTrait};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// 以 std::process 執行外部轉換器
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        CommandRunner
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunnerTrait for CommandRunner {
    fn run(&self, program: &Path, args: &[String], timeout: Option<Duration>) -> io::Result<ProcessOutput> {
        debug!("執行：{} {}", program.display(), args.join(" "));
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        // 另開執行緒讀取 stderr，避免管道塞滿時子程序卡住
        let stderr_reader = child.stderr.take().map(|mut stderr| {
            thread::spawn(move || {
                let mut buffer = Vec::new();
                let _ = stderr.read_to_end(&mut buffer);
                String::from_utf8_lossy(&buffer).to_string()
            })
        });

        let (status, timed_out) = match timeout {
            Some(limit) => wait_with_timeout(&mut child, limit)?,
            None => (Some(child.wait()?), false),
        };

        let stderr = stderr_reader
            .and_then(|handle| handle.join().ok())
            .unwrap_or_default();

        Ok(ProcessOutput {
            success: !timed_out && status.map(|s| s.success()).unwrap_or(false),
            exit_code: status.and_then(|s| s.code()),
            stderr,
            timed_out,
        })
    }
}

fn wait_with_timeout(
    child: &mut Child,
    limit: Duration,
) -> io::Result<(Option<std::process::ExitStatus>, bool)> {
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((Some(status), false));
        }
        if start.elapsed() >= limit {
            warn!("外部程式執行超過 {} 秒，強制終止", limit.as_secs_f64());
            child.kill()?;
            let status = child.wait()?;
            return Ok((Some(status), true));
        }
        thread::sleep(POLL_INTERVAL);
    }
}
