use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Target platform for a generated icon set.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Platform {
    /// Windows, packaged as a multi-image ICO file.
    Windows,
    /// macOS, packaged as an ICNS file.
    Mac,
    /// Android, packaged as a ZIP of density-bucket directories.
    Android,
    /// iOS, packaged as a ZIP of size-named PNG files.
    Ios,
}

const WINDOWS_SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 256, 512];
const MAC_SIZES: &[u32] = &[16, 32, 64, 128, 256, 512, 1024];
const ANDROID_SIZES: &[u32] = &[48, 72, 96, 144, 192, 512];
const IOS_SIZES: &[u32] =
    &[20, 29, 40, 58, 60, 76, 80, 87, 120, 152, 167, 180, 1024];

impl Platform {
    /// All supported platforms.
    pub const ALL: [Platform; 4] =
        [Platform::Windows, Platform::Mac, Platform::Android, Platform::Ios];

    /// Standard icon sizes for this platform, ascending and unique.
    pub fn standard_sizes(self) -> &'static [u32] {
        match self {
            Platform::Windows => WINDOWS_SIZES,
            Platform::Mac => MAC_SIZES,
            Platform::Android => ANDROID_SIZES,
            Platform::Ios => IOS_SIZES,
        }
    }

    /// Source image size that yields full-quality output for every standard
    /// size of this platform.
    pub fn recommended_size(self) -> u32 {
        match self {
            Platform::Windows => 512,
            Platform::Mac => 1024,
            Platform::Android => 512,
            Platform::Ios => 1024,
        }
    }

    /// Lowercase tag used for external interfaces (`"windows"`, `"mac"`,
    /// `"android"`, `"ios"`).
    pub fn tag(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }

    /// Human-readable platform name.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Mac => "Mac",
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        out.write_str(self.tag())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(input: &str) -> Result<Platform, Error> {
        match input {
            "windows" => Ok(Platform::Windows),
            "mac" => Ok(Platform::Mac),
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            _ => Err(Error::UnsupportedPlatform(input.to_string())),
        }
    }
}

/// A Macintosh OSType (also known as a ResType), used in ICNS files to
/// identify the type of each icon chunk.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OSType(pub [u8; 4]);

impl fmt::Display for OSType {
    fn fmt(&self, out: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let &OSType(raw) = self;
        for &byte in &raw {
            write!(out, "{}", char::from(byte))?;
        }
        Ok(())
    }
}

/// Returns the ICNS OSType tag for a PNG icon of the given size.
///
/// Sizes outside the standard mac table fall back to `ic07`; the produced
/// file then mislabels that icon's size, so callers should stick to the mac
/// standard size list.
///
/// # Examples
/// ```
/// use iconmerger::icns_tag;
/// assert_eq!(icns_tag(512).to_string(), "ic08");
/// assert_eq!(icns_tag(1024).to_string(), "ic09");
/// ```
pub fn icns_tag(size: u32) -> OSType {
    match size {
        16 => OSType(*b"is32"),
        32 => OSType(*b"il32"),
        64 => OSType(*b"ih32"),
        128 => OSType(*b"it32"),
        256 => OSType(*b"ic07"),
        512 => OSType(*b"ic08"),
        1024 => OSType(*b"ic09"),
        _ => {
            warn!(size, "no ICNS tag for this size, falling back to ic07");
            OSType(*b"ic07")
        }
    }
}

/// Returns the Android density-bucket directory for an icon size, by
/// inclusive upper bound.
///
/// # Examples
/// ```
/// use iconmerger::android_bucket;
/// assert_eq!(android_bucket(48), "drawable-mdpi");
/// assert_eq!(android_bucket(192), "drawable-xxxhdpi");
/// ```
pub fn android_bucket(size: u32) -> &'static str {
    match size {
        0..=36 => "drawable-ldpi",
        37..=48 => "drawable-mdpi",
        49..=72 => "drawable-hdpi",
        73..=96 => "drawable-xhdpi",
        97..=144 => "drawable-xxhdpi",
        _ => "drawable-xxxhdpi",
    }
}

/// Returns the iOS app-icon filename for a size.  Every standard size uses
/// the `Icon-{size}.png` pattern, and unmapped sizes fall back to the same
/// size-qualified name.
pub fn ios_filename(size: u32) -> String {
    format!("Icon-{}.png", size)
}

/// Short descriptive label for a size on a platform, for display next to a
/// generated variant.
pub fn size_description(platform: Platform, size: u32) -> &'static str {
    match platform {
        Platform::Windows => match size {
            16 | 24 => "Small Icon",
            32 => "Normal Icon",
            48 | 64 => "Large Icon",
            128 | 256 => "Very Large Icon",
            512 => "High Resolution Icon",
            _ => "Normal Icon",
        },
        Platform::Mac => match size {
            16 | 32 => "Small Icon",
            64 => "Normal Icon",
            128 | 256 => "Large Icon",
            512 => "Very Large Icon",
            1024 => "High Resolution Icon",
            _ => "Normal Icon",
        },
        Platform::Android => match size {
            48 => "Medium Resolution",
            72 => "High Resolution",
            96 => "Very High Resolution",
            144 | 192 => "Ultra High Resolution",
            512 => "Play Store Icon",
            _ => "Normal Icon",
        },
        Platform::Ios => match size {
            20 | 29 => "Small Icon",
            40 | 58 | 60 => "Normal Icon",
            76 | 80 | 87 => "Large Icon",
            120 | 152 | 167 | 180 => "Very Large Icon",
            1024 => "App Store Icon",
            _ => "Normal Icon",
        },
    }
}

/// Usage label for a size on a platform (where the OS shows it).
pub fn size_usage(platform: Platform, size: u32) -> &'static str {
    match platform {
        Platform::Windows => match size {
            16 | 24 => "Taskbar, File Explorer",
            32 | 48 | 64 | 128 | 256 => "Desktop, File Explorer",
            512 => "High Resolution Display",
            _ => "General Use",
        },
        Platform::Mac => match size {
            16 | 32 | 64 | 128 | 256 | 512 => "Finder, Dock",
            1024 => "High Resolution Display",
            _ => "General Use",
        },
        Platform::Android => match size {
            48 => "mdpi (160dpi)",
            72 => "hdpi (240dpi)",
            96 => "xhdpi (320dpi)",
            144 => "xxhdpi (480dpi)",
            192 => "xxxhdpi (640dpi)",
            512 => "Google Play Store",
            _ => "General Use",
        },
        Platform::Ios => match size {
            20 | 29 | 40 | 58 | 60 => "Settings, Notifications",
            76 | 80 | 87 | 120 | 152 | 167 | 180 => "Home Screen, Spotlight",
            1024 => "App Store",
            _ => "General Use",
        },
    }
}

/// Coarse quality assessment of a source image for a target platform.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SourceQuality {
    /// The source meets the platform's recommended size in both dimensions.
    Excellent,
    /// The source reaches at least 80% of the recommended size.
    Good,
    /// The source falls short; upscaling will visibly degrade large sizes.
    NeedsImprovement,
}

/// Judges whether a source image is large enough for a platform's icon set.
/// Small sources are still accepted for generation; this only informs the
/// caller.
pub fn assess_source(platform: Platform, width: u32, height: u32) -> SourceQuality {
    let recommended = platform.recommended_size();
    if width >= recommended && height >= recommended {
        SourceQuality::Excellent
    } else if width * 5 >= recommended * 4 && height * 5 >= recommended * 4 {
        SourceQuality::Good
    } else {
        SourceQuality::NeedsImprovement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn standard_sizes_are_strictly_ascending() {
        for platform in Platform::ALL {
            let sizes = platform.standard_sizes();
            assert!(!sizes.is_empty());
            for pair in sizes.windows(2) {
                assert!(pair[0] < pair[1], "{} sizes not ascending", platform);
            }
        }
    }

    #[test]
    fn recommended_size_is_a_standard_size() {
        for platform in Platform::ALL {
            assert!(platform
                .standard_sizes()
                .contains(&platform.recommended_size()));
        }
    }

    #[test]
    fn platform_tags_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_str(platform.tag()).unwrap(), platform);
        }
    }

    #[test]
    fn unknown_platform_tag_is_rejected() {
        let err = Platform::from_str("amiga").unwrap_err();
        assert!(matches!(err, Error::UnsupportedPlatform(_)));
    }

    #[test]
    fn icns_tags_for_standard_mac_sizes() {
        let expected: &[(u32, &[u8; 4])] = &[
            (16, b"is32"),
            (32, b"il32"),
            (64, b"ih32"),
            (128, b"it32"),
            (256, b"ic07"),
            (512, b"ic08"),
            (1024, b"ic09"),
        ];
        for &(size, tag) in expected {
            assert_eq!(icns_tag(size), OSType(*tag));
        }
    }

    #[test]
    fn icns_tag_falls_back_for_unknown_sizes() {
        assert_eq!(icns_tag(48), OSType(*b"ic07"));
    }

    #[test]
    fn android_bucket_boundaries() {
        assert_eq!(android_bucket(36), "drawable-ldpi");
        assert_eq!(android_bucket(37), "drawable-mdpi");
        assert_eq!(android_bucket(48), "drawable-mdpi");
        assert_eq!(android_bucket(72), "drawable-hdpi");
        assert_eq!(android_bucket(96), "drawable-xhdpi");
        assert_eq!(android_bucket(144), "drawable-xxhdpi");
        assert_eq!(android_bucket(145), "drawable-xxxhdpi");
        assert_eq!(android_bucket(512), "drawable-xxxhdpi");
    }

    #[test]
    fn ios_filenames_are_size_keyed() {
        assert_eq!(ios_filename(60), "Icon-60.png");
        assert_eq!(ios_filename(1024), "Icon-1024.png");
        // Non-standard sizes still get a distinct name.
        assert_eq!(ios_filename(33), "Icon-33.png");
    }

    #[test]
    fn source_quality_thresholds() {
        assert_eq!(
            assess_source(Platform::Windows, 512, 512),
            SourceQuality::Excellent
        );
        assert_eq!(
            assess_source(Platform::Windows, 410, 512),
            SourceQuality::Good
        );
        assert_eq!(
            assess_source(Platform::Windows, 409, 512),
            SourceQuality::NeedsImprovement
        );
        assert_eq!(
            assess_source(Platform::Mac, 1024, 1024),
            SourceQuality::Excellent
        );
    }

    #[test]
    fn ostype_displays_as_ascii() {
        assert_eq!(OSType(*b"ic08").to_string(), "ic08");
    }
}
