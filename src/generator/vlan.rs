use serde::{Deserialize, Serialize};

/// Inclusive VLAN pool supplied once per batch run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VlanRange {
    pub start: u16,
    pub end: u16,
}

impl VlanRange {
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }
}

/// Rolling VLAN allocation across an ordered record sequence.
///
/// Both counters start at their range start and advance whenever the
/// (frame, slot, port) triple changes from the previous record — the very
/// first record counts as a change. Records sharing a triple reuse the
/// currently assigned pair, so one physical port carries one VLAN pair.
#[derive(Debug)]
pub struct VlanAllocator {
    biz: VlanRange,
    iptv: VlanRange,
    current_biz: u16,
    current_iptv: u16,
    last_triple: Option<(String, String, String)>,
}

impl VlanAllocator {
    pub fn new(biz: VlanRange, iptv: VlanRange) -> Self {
        Self {
            biz,
            iptv,
            current_biz: biz.start,
            current_iptv: iptv.start,
            last_triple: None,
        }
    }

    /// Assign the (business, IPTV) VLAN pair for a record on the given
    /// port triple, advancing the counters when the triple changes.
    pub fn assign(&mut self, frame: &str, slot: &str, pon_port: &str) -> (u16, u16) {
        let changed = match &self.last_triple {
            Some((f, s, p)) => f != frame || s != slot || p != pon_port,
            None => true,
        };
        if changed {
            self.current_biz = step(self.current_biz, self.biz);
            self.current_iptv = step(self.current_iptv, self.iptv);
        }
        self.last_triple = Some((frame.to_string(), slot.to_string(), pon_port.to_string()));
        (self.current_biz, self.current_iptv)
    }
}

/// Increment within the range, wrapping back to the start once the end
/// value has been handed out.
fn step(current: u16, range: VlanRange) -> u16 {
    if current < range.end {
        current + 1
    } else {
        range.start
    }
}
