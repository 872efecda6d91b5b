//! Cart line identity
//!
//! A line id is a hash of the line's identity-defining properties, taken from
//! the *normalized* configuration:
//! - menu item id
//! - serving style
//! - trimmed instructions
//! - sorted, deduplicated allergy tags
//! - trimmed custom allergy note
//!
//! Configurations with the same line id are merged (quantities added together).
//! Each variable-length field is written with a length prefix, so a delimiter
//! inside free text can never make two different configurations collide.

use sha2::{Digest, Sha256};
use shared::models::{CartLine, LineConfig, LineId, MenuItem, ServingStyle};

/// Generate the line id for an item configured with `config`
///
/// `config` is normalized here; callers may pass raw user input.
pub fn generate_line_id(item_id: &str, config: &LineConfig) -> LineId {
    let normalized = config.normalized();
    generate_line_id_from_parts(
        item_id,
        normalized.serving_style,
        &normalized.instructions,
        &normalized.allergy_tags,
        &normalized.custom_allergy_note,
    )
}

/// Hash already-normalized parts
pub(crate) fn generate_line_id_from_parts(
    item_id: &str,
    serving_style: ServingStyle,
    instructions: &str,
    allergy_tags: &[String],
    custom_allergy_note: &str,
) -> LineId {
    let mut hasher = Sha256::new();

    update_field(&mut hasher, item_id.as_bytes());
    hasher.update([match serving_style {
        ServingStyle::Dining => 0u8,
        ServingStyle::Takeaway => 1u8,
    }]);
    update_field(&mut hasher, instructions.as_bytes());

    hasher.update((allergy_tags.len() as u64).to_le_bytes());
    for tag in allergy_tags {
        update_field(&mut hasher, tag.as_bytes());
    }

    update_field(&mut hasher, custom_allergy_note.as_bytes());

    let result = hasher.finalize();
    LineId::new(hex::encode(&result[..16])) // First 16 bytes for a shorter id
}

fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

/// Build a new cart line with normalized configuration and generated id
pub fn input_to_line(item: &MenuItem, quantity: u32, config: &LineConfig) -> CartLine {
    let normalized = config.normalized();
    let line_id = generate_line_id_from_parts(
        &item.id,
        normalized.serving_style,
        &normalized.instructions,
        &normalized.allergy_tags,
        &normalized.custom_allergy_note,
    );

    CartLine {
        line_id,
        item: item.clone(),
        quantity,
        serving_style: normalized.serving_style,
        instructions: normalized.instructions,
        allergy_tags: normalized.allergy_tags,
        custom_allergy_note: normalized.custom_allergy_note,
    }
}
