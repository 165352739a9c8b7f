//! Diagnostic rendering: printable keys, slot dumps, cost summaries.

use crate::probe_map::ProbeMap;
use crate::slot::SlotView;
use std::io;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Render a key for display: verbatim inside `char key:[...]` when
/// every byte is printable (space included), hex digits inside
/// `hex key:[0x...]` otherwise.
pub fn printable_key(key: &[u8]) -> String {
    if key.iter().all(|&b| b == b' ' || b.is_ascii_graphic()) {
        let mut out = String::with_capacity(key.len() + 10);
        out.push_str("char key:[");
        for &b in key {
            out.push(char::from(b));
        }
        out.push(']');
        out
    } else {
        let mut out = String::with_capacity(2 * key.len() + 12);
        out.push_str("hex key:[0x");
        for &b in key {
            out.push(char::from(HEX[usize::from(b >> 4)]));
            out.push(char::from(HEX[usize::from(b & 0x0f)]));
        }
        out.push(']');
        out
    }
}

impl<V> ProbeMap<V> {
    /// Write one line per slot to `out`, each line prefixed with `tag`.
    /// Slots render as in use, never used, or deleted with the key the
    /// tombstone retains.
    pub fn dump<W: io::Write>(&self, mut out: W, tag: &str) -> io::Result<()> {
        writeln!(out, "{tag}Dumping table of {} slots:", self.size())?;
        for (index, view) in self.slots().enumerate() {
            match view {
                SlotView::Used { key, .. } => {
                    writeln!(out, "{tag}  {index} : in use : '{}'", printable_key(key))?;
                }
                SlotView::Empty => {
                    writeln!(out, "{tag}  {index} : empty (never used)")?;
                }
                SlotView::Deleted { key } => {
                    writeln!(
                        out,
                        "{tag}  {index} : empty (deleted - was '{}')",
                        printable_key(key)
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Write the table's occupancy, strategy names, and the probe costs
    /// accrued so far.
    pub fn summary<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        let costs = self.costs();
        writeln!(
            out,
            "Table of {} slots contains {} entries",
            self.size(),
            self.len()
        )?;
        writeln!(
            out,
            "Strategies used: '{}' hash, '{}' secondary hash and '{}' probing",
            self.primary_hash(),
            self.secondary_hash(),
            self.probe_strategy()
        )?;
        writeln!(out, "Costs accrued due to probing:")?;
        writeln!(out, "  Insertion : {}", costs.insert)?;
        writeln!(out, "  Search    : {}", costs.search)?;
        writeln!(out, "  Deletion  : {}", costs.delete)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::printable_key;

    /// Invariant: printable bytes, space included, render verbatim.
    #[test]
    fn printable_keys_render_as_chars() {
        assert_eq!(printable_key(b"cat"), "char key:[cat]");
        assert_eq!(printable_key(b"two words"), "char key:[two words]");
        assert_eq!(printable_key(b""), "char key:[]");
    }

    /// Invariant: one unprintable byte switches the whole key to hex.
    #[test]
    fn binary_keys_render_as_hex() {
        assert_eq!(printable_key(&[0xff, 0x00]), "hex key:[0xff00]");
        assert_eq!(printable_key(b"cat\n"), "hex key:[0x6361740a]");
        assert_eq!(printable_key(&[0x07]), "hex key:[0x07]");
    }
}
