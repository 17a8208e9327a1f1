/* src/cli/codegen/src/fingerprint.rs */

// Drift detection: the generated SDL embeds a fingerprint of the blueprint
// set it was produced from. `atelier generate --check` recomputes it and
// compares, so a blueprint edit with no regeneration is caught instead of
// silently shipping a stale schema.

use sha2::{Digest, Sha256};

use atelier_content::Blueprint;

/// Header comment line carrying the fingerprint inside a generated file.
pub const FINGERPRINT_PREFIX: &str = "# atelier:fingerprint ";

/// SHA-256 over the canonical JSON of the blueprint set, sorted by name.
/// Deliberately unsalted: identical blueprints always produce the same
/// fingerprint, on any machine.
pub fn blueprint_fingerprint(blueprints: &[Blueprint]) -> String {
  let mut sorted: Vec<&Blueprint> = blueprints.iter().collect();
  sorted.sort_by(|a, b| a.name.cmp(&b.name));

  let canonical = serde_json::to_string(&sorted).unwrap_or_default();
  let digest = Sha256::digest(canonical.as_bytes());
  hex::encode(digest)
}

/// Extract the fingerprint from a previously generated SDL file, if any.
pub fn embedded_fingerprint(sdl: &str) -> Option<&str> {
  sdl
    .lines()
    .find_map(|line| line.strip_prefix(FINGERPRINT_PREFIX))
    .map(str::trim)
    .filter(|f| !f.is_empty())
}
