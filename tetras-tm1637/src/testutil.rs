//! Recording pins and a waveform decoder for driver tests.
//!
//! The chip is write-only, so tests observe the driver from the outside:
//! both mock pins append level changes to one shared trace, and `decode`
//! replays that trace with the chip's sampling rules to recover the byte
//! transactions that a real TM1637 would have latched.

use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use heapless::Vec;

/// Which line a recorded level change happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clk,
    Dio,
}

/// Shared record of pin writes, in call order.
pub type Trace = RefCell<Vec<(Line, bool), 8192>>;

pub fn trace() -> Trace {
    RefCell::new(Vec::new())
}

/// Output pin that logs every write into a [`Trace`].
pub struct TracePin<'a> {
    line: Line,
    trace: &'a Trace,
}

impl<'a> TracePin<'a> {
    /// A (clk, dio) pin pair recording into the same trace.
    pub fn pair(trace: &'a Trace) -> (TracePin<'a>, TracePin<'a>) {
        (
            Self {
                line: Line::Clk,
                trace,
            },
            Self {
                line: Line::Dio,
                trace,
            },
        )
    }

    fn record(&mut self, level: bool) {
        self.trace.borrow_mut().push((self.line, level)).unwrap();
    }
}

impl ErrorType for TracePin<'_> {
    type Error = Infallible;
}

impl OutputPin for TracePin<'_> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.record(true);
        Ok(())
    }
}

/// One decoded bus transaction: the bytes framed between a start and a
/// stop condition.
pub type Transaction = Vec<u8, 4>;

/// Replay a trace with the chip's sampling rules.
///
/// Start is DIO falling while CLK is high, stop is DIO rising while CLK is
/// high, and data is sampled on rising CLK edges, LSB first. The ninth
/// clock after a full byte is the ack slot and carries no data; a byte cut
/// short by a stop condition is discarded.
pub fn decode(trace: &Trace) -> Vec<Transaction, 128> {
    let mut txns: Vec<Transaction, 128> = Vec::new();
    let mut clk = false;
    let mut dio = false;
    // In-flight transaction: completed bytes, bit count, bits so far.
    let mut cur: Option<(Transaction, u8, u8)> = None;

    for &(line, level) in trace.borrow().iter() {
        match line {
            Line::Clk => {
                if level && !clk {
                    if let Some((bytes, bits, byte)) = cur.as_mut() {
                        if *bits == 8 {
                            // Ack slot.
                            *bits = 0;
                            *byte = 0;
                        } else {
                            *byte |= (dio as u8) << *bits;
                            *bits += 1;
                            if *bits == 8 {
                                bytes.push(*byte).unwrap();
                            }
                        }
                    }
                }
                clk = level;
            }
            Line::Dio => {
                if clk && dio && !level {
                    cur = Some((Vec::new(), 0, 0));
                } else if clk && !dio && level {
                    if let Some((bytes, _, _)) = cur.take() {
                        txns.push(bytes).unwrap();
                    }
                }
                dio = level;
            }
        }
    }
    txns
}

/// The `(addr, data)` pairs of all grid writes in a trace, transaction
/// order preserved.
pub fn grid_writes(trace: &Trace) -> Vec<(u8, u8), 32> {
    let mut writes = Vec::new();
    for txn in decode(trace) {
        if let [addr_cmd, data] = txn.as_slice() {
            writes
                .push((addr_cmd - crate::protocol::CMD_ADDRESS, *data))
                .unwrap();
        }
    }
    writes
}
