#![no_std]
#![no_main]
#![feature(type_alias_impl_trait)]

#[macro_use]
mod infrastructure;
mod app;
mod controllers;

use embassy_executor::Spawner;
use embassy_time::Duration;

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use crate::app::LightUsecases;
use crate::infrastructure::config;
use crate::infrastructure::drivers::init_ble_controller;
use crate::infrastructure::tasks::{animation_task, ble_task, init_animation};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();
    log::info!(
        "main: {} firmware {}",
        config::DEVICE.name,
        config::DEVICE.version
    );

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Allocate heap memory (64 + 32 KB), the radio lives there
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );
    esp_alloc::heap_allocator!(size: 32 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Strip first, so the splash shows while the radio comes up
    let (driver, dispatcher) = init_animation(peripherals.RMT, led_gpio!(peripherals));
    spawner.spawn(animation_task(driver)).ok();

    let controller = init_ble_controller(peripherals.BT);
    spawner
        .spawn(ble_task(controller, LightUsecases::new(dispatcher)))
        .ok();

    loop {
        embassy_time::Timer::after(Duration::from_secs(60)).await;
        log::debug!(
            "main: heap used {} free {}",
            esp_alloc::HEAP.used(),
            esp_alloc::HEAP.free()
        );
    }
}
