use std::collections::HashMap;
use std::ptr;
use std::slice;
use std::sync::Mutex;

use foreign_types::ForeignType;
use libc::c_int;

use crate::{
    error::{Error, Result},
    ffi, Regex,
};

/// Write-once cache of group name → ascending group indices.
///
/// Populated lazily on first lookup and kept for the lifetime of the
/// pattern. Failed lookups are not cached.
#[derive(Debug, Default)]
pub(crate) struct NameCache(Mutex<HashMap<String, Vec<u32>>>);

impl NameCache {
    fn lookup(&self, name: &str) -> Option<Vec<u32>> {
        self.0.lock().expect("name cache").get(name).cloned()
    }

    fn store(&self, name: &str, indices: &[u32]) {
        self.0
            .lock()
            .expect("name cache")
            .entry(name.to_owned())
            .or_insert_with(|| indices.to_vec());
    }
}

impl Regex {
    /// True iff `name` is declared as a capture group in the pattern.
    pub fn has_capture_group(&self, name: &str) -> bool {
        self.group_indices(name).is_ok()
    }

    /// Resolve a capture group name to the group indices declared under it.
    ///
    /// A name may be bound to more than one index when it is reused across
    /// alternatives or repeated constructs; the indices come back in
    /// ascending numeric order, which is their left-to-right declaration
    /// order in the pattern. Repeated calls with the same name return the
    /// same sequence. Fails with [`Error::UnknownGroupName`] when the name
    /// is not declared at all.
    pub fn group_indices(&self, name: &str) -> Result<Vec<u32>> {
        if let Some(cached) = self.names.lookup(name) {
            return Ok(cached);
        }

        let bytes = name.as_bytes();
        let mut nums: *mut c_int = ptr::null_mut();

        // The array the engine hands back points into the pattern's own
        // name table and must not be freed here.
        let n = unsafe {
            ffi::onig_name_to_group_numbers(
                self.program.as_ptr(),
                bytes.as_ptr(),
                bytes.as_ptr().add(bytes.len()),
                &mut nums,
            )
        };

        if n <= 0 {
            return Err(Error::UnknownGroupName(name.to_owned()));
        }

        let mut indices: Vec<u32> = unsafe { slice::from_raw_parts(nums, n as usize) }
            .iter()
            .map(|&num| num as u32)
            .collect();
        indices.sort_unstable();

        self.names.store(name, &indices);

        Ok(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_indices() {
        let re = Regex::new("(?<foo>a*)(?<bar>b*)(?<foo>c*)").unwrap();

        assert_eq!(re.group_indices("foo").unwrap(), vec![1, 3]);
        assert_eq!(re.group_indices("bar").unwrap(), vec![2]);
    }

    #[test]
    fn test_resolution_is_stable() {
        let re = Regex::new("(?<foo>a*)(?<bar>b*)(?<foo>c*)").unwrap();

        let first = re.group_indices("foo").unwrap();
        let second = re.group_indices("foo").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_has_capture_group() {
        let re = Regex::new("^1st user (?<user>[a-z]*) value (?<val>[0-9]+)$").unwrap();

        assert!(re.has_capture_group("user"));
        assert!(re.has_capture_group("val"));
        assert!(!re.has_capture_group("void"));
        assert!(!re.has_capture_group(""));
    }

    #[test]
    fn test_unknown_name() {
        let re = Regex::new("(?<foo>a*)").unwrap();

        assert_eq!(
            re.group_indices("bar"),
            Err(Error::UnknownGroupName("bar".into()))
        );

        // A miss is not cached; the same lookup fails the same way again.
        assert_eq!(
            re.group_indices("bar"),
            Err(Error::UnknownGroupName("bar".into()))
        );
    }
}
