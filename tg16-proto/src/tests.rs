//! Driver tests against a simulated TG16 pad.

extern crate std;

use crate::mapping::{DOWN, I, II, LEFT, RUN, SELECT, UP};
use crate::{Tg16Gamepad, BANK_SETTLE_MS};
use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use gamepad_core::{Gamepad, InputBus, MAX_REPORT_SIZE};
use std::rc::Rc;
use std::vec::Vec;

// Counts outermost critical sections entered on the current test thread
struct CountingCriticalSection;
critical_section::set_impl!(CountingCriticalSection);

std::thread_local! {
    static NESTING: Cell<u32> = const { Cell::new(0) };
    static SECTIONS: Cell<u32> = const { Cell::new(0) };
}

unsafe impl critical_section::Impl for CountingCriticalSection {
    unsafe fn acquire() -> critical_section::RawRestoreState {
        NESTING.with(|n| {
            if n.get() == 0 {
                SECTIONS.with(|s| s.set(s.get() + 1));
            }
            n.set(n.get() + 1);
        });
        critical_section::RawRestoreState::default()
    }

    unsafe fn release(_state: critical_section::RawRestoreState) {
        NESTING.with(|n| n.set(n.get() - 1));
    }
}

fn sections_entered() -> u32 {
    SECTIONS.with(Cell::get)
}

fn interrupts_masked() -> bool {
    NESTING.with(Cell::get) > 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Select(bool),
    OutputEnable(bool),
    Sample,
}

#[derive(Default)]
struct Bench {
    now_ns: u64,
    /// Pressed signals in packed-byte layout (1 = pressed).
    held: u8,
    select: bool,
    /// Level of the active-low /OE line.
    oe_high: bool,
    events: Vec<(u64, Event)>,
}

impl Bench {
    fn log(&mut self, event: Event) {
        let now = self.now_ns;
        self.events.push((now, event));
    }

    fn sample(&mut self) -> u8 {
        self.log(Event::Sample);
        if self.oe_high {
            // outputs disabled, pull-ups win
            return 0x0f;
        }
        let bank = if self.select {
            self.held & 0x0f
        } else {
            self.held >> 4
        };
        !bank & 0x0f
    }
}

type Shared = Rc<RefCell<Bench>>;

struct SelectPin(Shared);
struct OePin(Shared);
struct SimBus(Shared);
struct SimDelay(Shared);

impl ErrorType for SelectPin {
    type Error = Infallible;
}

impl OutputPin for SelectPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mut bench = self.0.borrow_mut();
        bench.select = false;
        bench.log(Event::Select(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        let mut bench = self.0.borrow_mut();
        bench.select = true;
        bench.log(Event::Select(true));
        Ok(())
    }
}

impl ErrorType for OePin {
    type Error = Infallible;
}

impl OutputPin for OePin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mut bench = self.0.borrow_mut();
        bench.oe_high = false;
        bench.log(Event::OutputEnable(true));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        let mut bench = self.0.borrow_mut();
        bench.oe_high = true;
        bench.log(Event::OutputEnable(false));
        Ok(())
    }
}

impl InputBus for SimBus {
    const WIDTH: u8 = 4;

    fn sample(&mut self) -> u8 {
        self.0.borrow_mut().sample()
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().now_ns += u64::from(ns);
    }
}

type SimPad = Tg16Gamepad<SelectPin, OePin, SimBus, SimDelay>;

fn setup(held: u8) -> (Shared, SimPad) {
    let bench = Rc::new(RefCell::new(Bench {
        held,
        ..Bench::default()
    }));
    let pad = Tg16Gamepad::new(
        SelectPin(bench.clone()),
        OePin(bench.clone()),
        SimBus(bench.clone()),
        SimDelay(bench.clone()),
    );
    (bench, pad)
}

fn report(pad: &mut impl Gamepad) -> Vec<u8> {
    let mut buf = [0u8; MAX_REPORT_SIZE];
    let len = pad.build_report(Some(&mut buf), 0);
    buf[..len].to_vec()
}

#[test]
fn test_idle_pad_end_to_end() {
    let (_bench, mut pad) = setup(0);
    pad.initialize().unwrap();
    pad.poll();
    assert_eq!(report(&mut pad), [128, 128, 0]);

    // first check after initialize always reports
    let (_bench, mut pad) = setup(0);
    pad.initialize().unwrap();
    pad.poll();
    assert!(pad.has_changed(0));
    pad.build_report(None, 0);
    pad.poll();
    assert!(!pad.has_changed(0));
}

#[test]
fn test_initialize_leaves_outputs_disabled() {
    let (bench, mut pad) = setup(0);
    pad.initialize().unwrap();
    let bench = bench.borrow();
    assert!(bench.oe_high);
    assert_eq!(bench.events[0].1, Event::OutputEnable(false));
    assert_eq!(bench.events[1].1, Event::Select(true));
}

#[test]
fn test_both_banks_decoded() {
    let (bench, mut pad) = setup(0);
    pad.initialize().unwrap();

    bench.borrow_mut().held = UP | LEFT | I | RUN;
    pad.poll();
    assert_eq!(report(&mut pad), [0, 0, 0x09]);

    bench.borrow_mut().held = DOWN | II | SELECT;
    pad.poll();
    assert_eq!(report(&mut pad), [128, 255, 0x06]);
    assert_eq!(pad.state().buttons.raw(), 0x06);
}

#[test]
fn test_read_timing() {
    let (bench, mut pad) = setup(0);
    pad.initialize().unwrap();
    bench.borrow_mut().events.clear();
    pad.poll();

    let bench = bench.borrow();
    let kinds: Vec<Event> = bench.events.iter().map(|e| e.1).collect();
    assert_eq!(
        kinds,
        [
            Event::OutputEnable(true),
            Event::Select(true),
            Event::Sample,
            Event::Select(false),
            Event::Sample,
            Event::OutputEnable(false),
        ]
    );

    let settle = u64::from(BANK_SETTLE_MS) * 1_000_000;
    let at = |i: usize| bench.events[i].0;
    assert!(at(1) - at(0) >= settle);
    assert!(at(2) - at(1) >= settle);
    assert!(at(4) - at(3) >= settle);
}

#[test]
fn test_change_detection_contract() {
    let (bench, mut pad) = setup(0);
    pad.initialize().unwrap();
    assert!(pad.has_changed(0));
    pad.build_report(None, 0);

    bench.borrow_mut().held = I;
    pad.poll();
    assert!(pad.has_changed(0));
    let first = report(&mut pad);
    let second = report(&mut pad);
    assert_eq!(first, second);
    assert!(!pad.has_changed(0));
}

#[test]
fn test_initialize_runs_masked() {
    let (bench, mut pad) = setup(0);
    let before = sections_entered();
    pad.initialize().unwrap();
    assert_eq!(sections_entered() - before, 1);
    assert!(!interrupts_masked());

    // steady-state polls are short enough to run unmasked
    let before = sections_entered();
    pad.poll();
    assert_eq!(sections_entered(), before);
    assert!(bench.borrow().events.iter().any(|(_, e)| *e == Event::Sample));
}
