#![no_std]
#![no_main]

mod hw;

use esp_backtrace as _;

#[esp_hal::main]
fn main() -> ! {
    hw::run()
}
