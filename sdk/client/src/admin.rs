use boostify_primitives::Address;

/// The contract account is its own administrator, so the connected
/// wallet administers the selected contract iff they are the same
/// account. Missing either side means not an admin.
pub fn is_admin(
  connected: Option<&Address>,
  selected: Option<&Address>,
) -> bool {
  matches!((connected, selected), (Some(c), Some(s)) if c == s)
}

#[cfg(test)]
mod tests {
  use super::is_admin;

  #[test]
  fn admin_only_when_both_match() {
    let a = "0xabc".parse().unwrap();
    let b = "0xdef".parse().unwrap();
    let a_padded = "0x0abc".parse().unwrap();

    assert!(is_admin(Some(&a), Some(&a)));
    assert!(is_admin(Some(&a), Some(&a_padded)));
    assert!(!is_admin(Some(&a), Some(&b)));
    assert!(!is_admin(None, Some(&a)));
    assert!(!is_admin(Some(&a), None));
    assert!(!is_admin(None, None));
  }
}
