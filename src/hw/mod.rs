//! Hardware bring-up and the firmware tasks.
//!
//! Everything platform-specific lives under this module: peripheral init,
//! the SPI/I2C device drivers, the [`tactus::hal::Board`] implementation
//! and the two embassy tasks (UI loop, serial console).

mod board;
mod hx8357;
mod lsm6ds3;
mod serial;
mod tca9555;
mod xpt2046;

use core::cell::RefCell;

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use embassy_time::{Instant, Timer};
use embedded_hal_bus::{i2c::RefCellDevice as I2cDevice, spi::RefCellDevice as SpiDevice};
use esp_hal::{
    delay::Delay,
    efuse::Efuse,
    gpio::{Level, Output, OutputConfig},
    i2c::master::{Config as I2cConfig, I2c},
    spi::{
        master::{Config as SpiConfig, Spi},
        Mode as SpiMode,
    },
    time::Rate,
    timer::timg::TimerGroup,
    uart::{Config as UartConfig, Uart},
};
use static_cell::StaticCell;

use tactus::board as board_info;
use tactus::config::{CONSOLE_BAUD, DEFAULT_MODE_CHANGE_VOTES, UI_TICK_MS};
use tactus::console::Command;
use tactus::hal::Board;
use tactus::telemetry;
use tactus::touch::FilterThresholds;
use tactus::ui::{UiController, UiMode};

use board::HandsetBoard;
use hx8357::Hx8357;
use lsm6ds3::Lsm6ds3;
use tca9555::{Tca9555, EXPANDER_BACKLIGHT_PIN};
use xpt2046::Xpt2046;

pub(crate) static CONSOLE_COMMANDS: Channel<CriticalSectionRawMutex, Command, 8> = Channel::new();

pub fn run() -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default());
    esp_println::logger::init_logger_from_env();

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let uart_cfg = UartConfig::default().with_baudrate(CONSOLE_BAUD);
    let uart = Uart::new(peripherals.UART0, uart_cfg)
        .expect("failed to init UART0")
        .with_rx(peripherals.GPIO44)
        .with_tx(peripherals.GPIO43)
        .into_async();

    static EXECUTOR: StaticCell<esp_rtos::embassy::Executor> = StaticCell::new();
    let executor = EXECUTOR.init(esp_rtos::embassy::Executor::new());
    executor.run(move |spawner| {
        spawner.must_spawn(serial::console_task(uart));
        spawner.must_spawn(ui_task(
            peripherals.SPI2,
            peripherals.GPIO36,
            peripherals.GPIO35,
            peripherals.GPIO37,
            peripherals.GPIO48,
            peripherals.GPIO38,
            peripherals.GPIO47,
            peripherals.GPIO46,
            peripherals.I2C0,
            peripherals.GPIO8,
            peripherals.GPIO9,
        ));
    })
}

#[allow(clippy::too_many_arguments)]
#[embassy_executor::task]
async fn ui_task(
    spi2: esp_hal::peripherals::SPI2<'static>,
    sck: esp_hal::peripherals::GPIO36<'static>,
    mosi: esp_hal::peripherals::GPIO35<'static>,
    miso: esp_hal::peripherals::GPIO37<'static>,
    display_cs: esp_hal::peripherals::GPIO48<'static>,
    touch_cs: esp_hal::peripherals::GPIO38<'static>,
    display_dc: esp_hal::peripherals::GPIO47<'static>,
    display_rst: esp_hal::peripherals::GPIO46<'static>,
    i2c0: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO8<'static>,
    scl: esp_hal::peripherals::GPIO9<'static>,
) {
    // Display and touch controller share the SPI bus, each behind its own
    // chip select.
    let spi_cfg = SpiConfig::default()
        .with_frequency(Rate::from_mhz(20))
        .with_mode(SpiMode::_0);
    let spi = Spi::new(spi2, spi_cfg)
        .expect("failed to init SPI2")
        .with_sck(sck)
        .with_mosi(mosi)
        .with_miso(miso);
    let spi_bus = RefCell::new(spi);

    let display_spi = SpiDevice::new(
        &spi_bus,
        Output::new(display_cs, Level::High, OutputConfig::default()),
        Delay::new(),
    )
    .expect("failed to wrap display SPI device");
    let touch_spi = SpiDevice::new(
        &spi_bus,
        Output::new(touch_cs, Level::High, OutputConfig::default()),
        Delay::new(),
    )
    .expect("failed to wrap touch SPI device");

    let i2c_cfg = I2cConfig::default().with_frequency(Rate::from_khz(100));
    let i2c = I2c::new(i2c0, i2c_cfg)
        .expect("failed to init I2C0")
        .with_sda(sda)
        .with_scl(scl);
    let i2c_bus = RefCell::new(i2c);

    // Backlight stays off until the first frame is drawn.
    let mut expander = Tca9555::new(I2cDevice::new(&i2c_bus));
    if let Err(err) = expander.begin() {
        log::warn!("io expander unavailable: {err:?}");
    }
    let _ = expander.set_output(EXPANDER_BACKLIGHT_PIN, false);

    let mut delay = Delay::new();
    let mut display = Hx8357::new(
        display_spi,
        Output::new(display_dc, Level::Low, OutputConfig::default()),
        Output::new(display_rst, Level::High, OutputConfig::default()),
    );
    if let Err(err) = display.init(&mut delay) {
        log::error!("display init failed: {err:?}");
        halt_forever();
    }

    let accel = match Lsm6ds3::new(I2cDevice::new(&i2c_bus)) {
        Ok(accel) => Some(accel),
        Err(err) => {
            // The etch-a-sketch pen just stays put without it.
            log::warn!("accelerometer unavailable: {err:?}");
            None
        }
    };

    let touch = Xpt2046::new(touch_spi);
    let mut handset = HandsetBoard::new(display, touch, accel, Efuse::mac_address());

    let mut controller = UiController::new(
        UiMode::Menu,
        FilterThresholds::for_board(),
        DEFAULT_MODE_CHANGE_VOTES,
    );
    controller.begin(&mut handset);
    let _ = expander.set_output(EXPANDER_BACKLIGHT_PIN, true);
    log::info!("{} ready", board_info::BOARD_NAME);

    let boot = Instant::now();
    loop {
        while let Ok(command) = CONSOLE_COMMANDS.try_receive() {
            apply_command(command, &mut controller, &mut handset);
        }

        let now_ms = Instant::now().saturating_duration_since(boot).as_millis();
        controller.run_tick(&mut handset, now_ms);
        Timer::after_millis(UI_TICK_MS).await;
    }
}

fn apply_command<B: Board>(command: Command, controller: &mut UiController, board: &mut B) {
    match command {
        Command::SetTimeSensitivity(ms) => controller.set_time_sensitivity_ms(ms),
        Command::SetDistSensitivity(units) => controller.set_dist_sensitivity(units),
        Command::SetTreatAsNew(ms) => controller.set_treat_as_new_ms(ms),
        Command::SetVoteThreshold(votes) => controller.set_vote_threshold(votes),
        Command::SetMode(raw) => controller.request_mode_raw(board, raw),
        Command::Provision => controller.set_provisioned(board),
        Command::ShowInfo => telemetry::log_summary(),
    }
}

fn halt_forever() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
