use super::PointRegistry;

/// A deterministic name generator for synthesized points.
///
/// Produces `prefix` followed by spreadsheet-style letters: `A`..`Z`, `AA`,
/// `AB`, .. Names already held by the registry are skipped, so a user who
/// named a point `*_A` still gets a fresh name for the first implicit point.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    prefix: String,
    counter: usize,
}

impl NameGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }

    /// Generate the next name in the sequence that `registry` does not already use.
    pub fn next_name(&mut self, registry: &PointRegistry) -> String {
        loop {
            let name = format!("{}{}", self.prefix, letters(self.counter));
            self.counter += 1;
            if !registry.contains_name(&name) {
                return name;
            }
        }
    }
}

/// 0 -> "A", 25 -> "Z", 26 -> "AA", 27 -> "AB", ..
fn letters(mut index: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    out.iter().rev().map(|&b| b as char).collect()
}
