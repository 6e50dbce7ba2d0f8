use std::ops::Range;

use foreign_types::{foreign_type, ForeignType, ForeignTypeRef};
use libc::c_int;

use crate::{
    error::{Error, Result},
    ffi,
};

foreign_type! {
    /// The engine's per-match record of begin/end offsets for every group
    /// index. Freed exactly once when dropped.
    pub unsafe type Region: Send {
        type CType = ffi::OnigRegion;

        fn drop = free_region;
    }
}

unsafe fn free_region(region: *mut ffi::OnigRegion) {
    ffi::onig_region_free(region, 1);
}

impl Region {
    /// Allocate an empty region for the engine to populate.
    pub(crate) fn alloc() -> Result<Region> {
        let p = unsafe { ffi::onig_region_new() };

        if p.is_null() {
            Err(Error::Engine("failed to allocate match region".into()))
        } else {
            Ok(unsafe { Region::from_ptr(p) })
        }
    }
}

impl RegionRef {
    /// Number of group slots the engine populated. Group 0 is the whole
    /// match; a slot exists for every capture group in the pattern whether
    /// or not it participated.
    pub fn group_count(&self) -> usize {
        unsafe { (*self.as_ptr()).num_regs as usize }
    }

    /// Raw begin/end offsets for a group as reported by the engine, with
    /// `ONIG_REGION_NOTPOS` in both slots marking a group that did not
    /// participate in the match.
    pub(crate) fn offsets(&self, group: usize) -> Option<(c_int, c_int)> {
        if group >= self.group_count() {
            return None;
        }

        unsafe {
            let r = &*self.as_ptr();

            Some((*r.beg.add(group), *r.end.add(group)))
        }
    }

    /// The byte range a group captured, or `None` if the group did not
    /// participate in the match or lies outside the region.
    pub fn span(&self, group: usize) -> Option<Range<usize>> {
        let (beg, end) = self.offsets(group)?;

        if beg < 0 || end < 0 {
            None
        } else {
            Some(beg as usize..end as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_region() {
        let region = Region::alloc().unwrap();

        assert_eq!(region.group_count(), 0);
        assert_eq!(region.span(0), None);
    }
}
