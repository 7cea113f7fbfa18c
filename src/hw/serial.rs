//! The serial console task: accumulate bytes into lines, parse, forward
//! commands to the UI task.

use embassy_time::Timer;
use esp_hal::{uart::Uart, Async};

use tactus::config::CONSOLE_LINE_MAX;
use tactus::console;

use super::CONSOLE_COMMANDS;

enum LineEvent<'a> {
    None,
    Complete(&'a [u8]),
    Overflow,
}

struct LineReader {
    buf: [u8; CONSOLE_LINE_MAX],
    len: usize,
    overflowed: bool,
}

impl LineReader {
    const fn new() -> Self {
        Self {
            buf: [0; CONSOLE_LINE_MAX],
            len: 0,
            overflowed: false,
        }
    }

    fn push_byte(&mut self, byte: u8) -> LineEvent<'_> {
        if byte == b'\r' || byte == b'\n' {
            if self.overflowed {
                self.overflowed = false;
                return LineEvent::None;
            }
            if self.len == 0 {
                return LineEvent::None;
            }
            let complete = self.len;
            self.len = 0;
            return LineEvent::Complete(&self.buf[..complete]);
        }

        if self.overflowed {
            return LineEvent::None;
        }
        if self.len < self.buf.len() {
            self.buf[self.len] = byte;
            self.len += 1;
            return LineEvent::None;
        }

        self.len = 0;
        self.overflowed = true;
        LineEvent::Overflow
    }
}

#[embassy_executor::task]
pub(crate) async fn console_task(mut uart: Uart<'static, Async>) {
    let mut reader = LineReader::new();
    let mut byte = [0u8; 1];

    loop {
        match uart.read_async(&mut byte).await {
            Ok(count) if count > 0 => {
                let command = match reader.push_byte(byte[0]) {
                    LineEvent::Complete(line) => {
                        let parsed = console::parse(line);
                        if parsed.is_none() {
                            log::warn!("console: unrecognized command");
                        }
                        parsed
                    }
                    LineEvent::Overflow => {
                        log::warn!("console: line too long, dropped");
                        None
                    }
                    LineEvent::None => None,
                };
                if let Some(command) = command {
                    CONSOLE_COMMANDS.send(command).await;
                }
            }
            Ok(_) => {}
            Err(_) => Timer::after_millis(10).await,
        }
    }
}
