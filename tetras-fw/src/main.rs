//! Tetras demo firmware
//!
//! Drives a TM1637 module wired to an RP2040: counts up once a second
//! with the colon blinking at 2 Hz.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use tetras_tm1637::{Tm1637, Tm1637Config};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let clk = Output::new(p.PIN_14, Level::Low);
    let dio = Output::new(p.PIN_15, Level::Low);

    // Pin errors on the RP2040 are infallible, hence the unwraps below.
    let mut display = Tm1637::new(clk, dio, Tm1637Config::default()).unwrap();
    info!("display up, {} digits", display.digits());

    let mut seconds: i32 = 0;
    loop {
        display.show_number(seconds).unwrap();

        display.show_colon(true).unwrap();
        Timer::after_millis(500).await;
        display.show_colon(false).unwrap();
        Timer::after_millis(500).await;

        seconds = (seconds + 1) % 10_000;
    }
}
