use crate::catalog::Platform;
use crate::error::Result;
use crate::image::Image;
use crate::variant::IconVariant;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Per-platform store of generated icon variants.
///
/// Each platform owns an independent slot with its own lifecycle: switching
/// between platforms never touches another platform's cached variants, and
/// invalidation clears exactly one slot.  A slot is either absent or holds
/// the complete standard-size set for its platform; a partially generated
/// set is never observable.
#[derive(Default)]
pub struct IconSetCache {
    slots: HashMap<Platform, Slot>,
}

#[derive(Default)]
struct Slot {
    generation: u64,
    variants: Option<Vec<IconVariant>>,
}

impl IconSetCache {
    /// Creates an empty cache.
    pub fn new() -> IconSetCache {
        IconSetCache::default()
    }

    /// Generates and caches every standard-size variant for `platform` from
    /// `source`, or returns the already-cached set.  Generation runs one
    /// task per size and fails as a whole if any size fails.
    pub fn ensure(
        &mut self,
        platform: Platform,
        source: &Image,
    ) -> Result<&[IconVariant]> {
        if self.variants(platform).is_none() {
            let stamp = self.generation(platform);
            let generated = generate_set(platform, source)?;
            self.commit(platform, stamp, generated);
        }
        match self.variants(platform) {
            Some(variants) => Ok(variants),
            // The commit above cannot be preempted while &mut self is held.
            None => unreachable!(),
        }
    }

    /// Drops `platform`'s cached variants and bumps its generation stamp so
    /// that any in-flight generation started against the old source is
    /// discarded when it commits.  Other platforms are untouched.
    pub fn invalidate(&mut self, platform: Platform) {
        let slot = self.slots.entry(platform).or_default();
        slot.generation += 1;
        slot.variants = None;
    }

    /// Regenerates `platform`'s variants from a new source image.
    pub fn replace(
        &mut self,
        platform: Platform,
        source: &Image,
    ) -> Result<&[IconVariant]> {
        self.invalidate(platform);
        self.ensure(platform, source)
    }

    /// Cached variants for `platform`, or `None` when not yet generated.
    pub fn variants(&self, platform: Platform) -> Option<&[IconVariant]> {
        self.slots
            .get(&platform)
            .and_then(|slot| slot.variants.as_deref())
    }

    /// True once every standard size for `platform` has its PNG payload.
    pub fn is_ready(&self, platform: Platform) -> bool {
        self.variants(platform).is_some()
    }

    /// Current generation stamp for `platform`.  Asynchronous callers record
    /// this before starting a generation and hand it back to
    /// [`commit`](IconSetCache::commit).
    pub fn generation(&self, platform: Platform) -> u64 {
        self.slots.get(&platform).map_or(0, |slot| slot.generation)
    }

    /// Stores a completed variant set if `stamp` still matches `platform`'s
    /// generation.  Returns `false` and drops the set when the slot was
    /// invalidated or replaced after the stamp was taken, so a cancelled
    /// generation can never overwrite a newer image's slot.
    pub fn commit(
        &mut self,
        platform: Platform,
        stamp: u64,
        variants: Vec<IconVariant>,
    ) -> bool {
        let slot = self.slots.entry(platform).or_default();
        if slot.generation != stamp {
            debug!(
                %platform,
                stamp,
                current = slot.generation,
                "discarding stale icon set"
            );
            return false;
        }
        slot.variants = Some(variants);
        true
    }
}

/// Builds the complete variant set for a platform, one independent task per
/// size.  The collect is the completion barrier: either every size has its
/// PNG payload, or the first failure aborts the whole batch.
pub fn generate_set(
    platform: Platform,
    source: &Image,
) -> Result<Vec<IconVariant>> {
    debug!(
        %platform,
        sizes = platform.standard_sizes().len(),
        source_width = source.width(),
        source_height = source.height(),
        "generating icon set"
    );
    platform
        .standard_sizes()
        .par_iter()
        .map(|&size| IconVariant::generate(source, size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> Image {
        Image::new(8, 8)
    }

    #[test]
    fn ensure_generates_every_standard_size() {
        let mut cache = IconSetCache::new();
        let variants = cache.ensure(Platform::Android, &source()).unwrap();
        let sizes: Vec<u32> = variants.iter().map(|v| v.size()).collect();
        assert_eq!(sizes, Platform::Android.standard_sizes());
        for variant in variants {
            assert!(!variant.png_data().is_empty());
        }
    }

    #[test]
    fn ensure_reuses_the_cached_set() {
        let mut cache = IconSetCache::new();
        let first = cache.ensure(Platform::Windows, &source()).unwrap().as_ptr();
        let second =
            cache.ensure(Platform::Windows, &source()).unwrap().as_ptr();
        assert_eq!(first, second);
        assert_eq!(cache.generation(Platform::Windows), 0);
    }

    #[test]
    fn invalidate_clears_only_one_platform() {
        let mut cache = IconSetCache::new();
        cache.ensure(Platform::Windows, &source()).unwrap();
        cache.ensure(Platform::Mac, &source()).unwrap();
        cache.invalidate(Platform::Mac);
        assert!(cache.is_ready(Platform::Windows));
        assert!(!cache.is_ready(Platform::Mac));
    }

    #[test]
    fn replace_regenerates_the_set() {
        let mut cache = IconSetCache::new();
        cache.ensure(Platform::Ios, &source()).unwrap();
        let stamp = cache.generation(Platform::Ios);
        cache.replace(Platform::Ios, &source()).unwrap();
        assert_eq!(cache.generation(Platform::Ios), stamp + 1);
        assert!(cache.is_ready(Platform::Ios));
    }

    #[test]
    fn stale_commit_is_discarded() {
        let mut cache = IconSetCache::new();
        let stamp = cache.generation(Platform::Android);
        let generated = generate_set(Platform::Android, &source()).unwrap();
        cache.invalidate(Platform::Android);
        assert!(!cache.commit(Platform::Android, stamp, generated));
        assert!(!cache.is_ready(Platform::Android));
    }

    #[test]
    fn fresh_commit_is_stored() {
        let mut cache = IconSetCache::new();
        let stamp = cache.generation(Platform::Mac);
        let generated = generate_set(Platform::Mac, &source()).unwrap();
        assert!(cache.commit(Platform::Mac, stamp, generated));
        assert!(cache.is_ready(Platform::Mac));
    }
}
