#![no_std]
#![no_main]

use db9_proto::Db9Gamepad;
use defmt::{error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_time::{Delay, Duration, Ticker, Timer};
use embassy_usb::class::hid::State;
use embassy_usb::{Builder, Config as UsbConfig};
use gamepad_core::{DeviceIdentity, Gamepad, OutputSink, PadBridge, PinBus};
use nes_proto::NesGamepad;
use retro_to_usb::{
    configure_usb_hid, Pad, PadFamily, ReportSignal, ReportSignalSink, UsbHidOutput,
    DEFAULT_PRODUCT_ID, DEFAULT_VENDOR_ID, POLL_PERIOD_MS,
};
use static_cell::StaticCell;
use tg16_proto::Tg16Gamepad;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

/// Latest serialized report, from the poll task to the USB task.
static REPORT_SIGNAL: StaticCell<ReportSignal> = StaticCell::new();

static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

static HID_STATE: StaticCell<State> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("retro-to-usb starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Mode jumpers ---
    let j1 = Input::new(p.PIN_14, Pull::Up);
    let j2 = Input::new(p.PIN_15, Pull::Up);
    // Let the pull-ups charge the lines before sampling
    Timer::after_millis(1).await;
    let family = PadFamily::from_jumpers(j1.is_low(), j2.is_low());
    info!("Mode: {:?}", family);

    // --- Controller port ---
    let mut pad = match family {
        PadFamily::Nes => Pad::Nes(NesGamepad::new(
            Output::new(p.PIN_2, Level::Low),
            Output::new(p.PIN_3, Level::High),
            Input::new(p.PIN_4, Pull::Up),
            Delay,
        )),
        PadFamily::Db9 => Pad::Db9(Db9Gamepad::new(
            Output::new(p.PIN_2, Level::High),
            PinBus::new([
                Input::new(p.PIN_4, Pull::Up),
                Input::new(p.PIN_5, Pull::Up),
                Input::new(p.PIN_6, Pull::Up),
                Input::new(p.PIN_7, Pull::Up),
                Input::new(p.PIN_8, Pull::Up),
                Input::new(p.PIN_9, Pull::Up),
            ]),
            Delay,
        )),
        PadFamily::Tg16 => Pad::Tg16(Tg16Gamepad::new(
            Output::new(p.PIN_2, Level::High),
            Output::new(p.PIN_3, Level::High),
            PinBus::new([
                Input::new(p.PIN_4, Pull::Up),
                Input::new(p.PIN_5, Pull::Up),
                Input::new(p.PIN_6, Pull::Up),
                Input::new(p.PIN_7, Pull::Up),
            ]),
            Delay,
        )),
    };

    if let Err(e) = pad.initialize() {
        error!("Controller init failed: {:?}", e);
        // Stay off the bus so the host never sees a half-working device
        loop {
            Timer::after_secs(1).await;
        }
    }

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    let identity = pad
        .device_descriptor()
        .and_then(DeviceIdentity::parse)
        .unwrap_or(DeviceIdentity {
            vendor_id: DEFAULT_VENDOR_ID,
            product_id: DEFAULT_PRODUCT_ID,
            device_version: 0x0100,
        });

    let mut usb_config = UsbConfig::new(identity.vendor_id, identity.product_id);
    usb_config.device_release = identity.device_version;
    usb_config.manufacturer = Some("retro-to-usb");
    usb_config.product = Some(family.product_name());
    usb_config.serial_number = Some("001");
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    let hid_state = HID_STATE.init(State::new());
    let hid_writer = configure_usb_hid(&mut builder, hid_state, pad.report_descriptor());

    let usb_device = builder.build();
    let usb_output = UsbHidOutput::new(hid_writer);

    let signal = REPORT_SIGNAL.init(ReportSignal::new());
    let bridge = PadBridge::new(pad, ReportSignalSink::new(signal));

    spawner.spawn(usb_task(usb_device).unwrap());
    spawner.spawn(poll_task(bridge).unwrap());
    spawner.spawn(output_task(usb_output, signal).unwrap());

    info!("retro-to-usb initialized");
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// Poll task - reads the controller every tick and signals changed reports.
#[embassy_executor::task]
async fn poll_task(mut bridge: PadBridge<Pad<'static>, ReportSignalSink>) {
    let mut ticker = Ticker::every(Duration::from_millis(POLL_PERIOD_MS));
    loop {
        if let Err(e) = bridge.process_one().await {
            warn!("Report not forwarded: {:?}", e);
        }
        ticker.next().await;
    }
}

/// Output task - waits for reports and writes them to the HID endpoint.
#[embassy_executor::task]
async fn output_task(mut output: UsbHidOutput<'static>, signal: &'static ReportSignal) {
    output.wait_ready().await;
    info!("USB HID ready, forwarding reports...");

    loop {
        let report = signal.wait().await;
        if let Err(e) = output.send(&report).await {
            error!("Output error: {:?}", e);
        }
    }
}
