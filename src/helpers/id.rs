use uuid::Uuid;

/// An 8 character uppercase hexadecimal identifier.
///
/// Taken from the first segment of a random v4 UUID, so it carries 32 bits of
/// entropy and is not unique on its own.
pub fn generate_id() -> String {
    let (time_low, _, _, _) = Uuid::new_v4().as_fields();
    format!("{time_low:08X}")
}
