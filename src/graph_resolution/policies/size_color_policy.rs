use crate::graph_resolution::domain::{PackageSize, SizeUnit};

/// Colors for sizes below 10, below 100, and from 100 up, in kilobytes
const KILOBYTE_BANDS: [&str; 3] = ["azure", "lightcyan", "paleturquoise"];

/// Colors for sizes below 10, below 100, and from 100 up, in megabytes
const MEGABYTE_BANDS: [&str; 3] = ["yellow", "orange", "hotpink"];

/// SizeColorPolicy maps a package size to a Graphviz fill color
///
/// The band is chosen from the displayed value, so a node labeled `99KB` is
/// always `lightcyan` and one labeled `1MB` is always `yellow`. Pale blues mark
/// kilobyte packages; yellow to pink marks megabyte packages. Anything of a
/// gigabyte or more shares the top megabyte color.
pub struct SizeColorPolicy;

impl SizeColorPolicy {
    pub fn color(size: PackageSize) -> &'static str {
        let (value, unit) = size.magnitude();
        match unit {
            SizeUnit::Kilobytes => Self::band(value, &KILOBYTE_BANDS),
            SizeUnit::Megabytes => Self::band(value, &MEGABYTE_BANDS),
            _ => MEGABYTE_BANDS[2],
        }
    }

    fn band(value: u64, colors: &[&'static str; 3]) -> &'static str {
        match value {
            0..=9 => colors[0],
            10..=99 => colors[1],
            _ => colors[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb(value: u64) -> PackageSize {
        PackageSize::from_kilobytes(value)
    }

    fn mb(value: u64) -> PackageSize {
        PackageSize::from_kilobytes(value * 1024)
    }

    #[test]
    fn test_kilobyte_bands() {
        assert_eq!(SizeColorPolicy::color(kb(0)), "azure");
        assert_eq!(SizeColorPolicy::color(kb(9)), "azure");
        assert_eq!(SizeColorPolicy::color(kb(10)), "lightcyan");
        assert_eq!(SizeColorPolicy::color(kb(99)), "lightcyan");
        assert_eq!(SizeColorPolicy::color(kb(100)), "paleturquoise");
        assert_eq!(SizeColorPolicy::color(kb(1023)), "paleturquoise");
    }

    #[test]
    fn test_megabyte_bands() {
        assert_eq!(SizeColorPolicy::color(mb(1)), "yellow");
        assert_eq!(SizeColorPolicy::color(mb(9)), "yellow");
        assert_eq!(SizeColorPolicy::color(mb(10)), "orange");
        assert_eq!(SizeColorPolicy::color(mb(99)), "orange");
        assert_eq!(SizeColorPolicy::color(mb(100)), "hotpink");
        assert_eq!(SizeColorPolicy::color(mb(1023)), "hotpink");
    }

    #[test]
    fn test_band_follows_truncated_display_value() {
        // 9.9 MB is displayed as 9MB
        assert_eq!(SizeColorPolicy::color(kb(10 * 1024 - 1)), "yellow");
    }

    #[test]
    fn test_gigabytes_use_top_color() {
        assert_eq!(SizeColorPolicy::color(mb(1024)), "hotpink");
        assert_eq!(SizeColorPolicy::color(mb(5 * 1024 * 1024)), "hotpink");
    }
}
