/// Unit a [`PackageSize`] is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeUnit {
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Petabytes,
    Exabytes,
    Zettabytes,
}

impl SizeUnit {
    const ASCENDING: [SizeUnit; 7] = [
        SizeUnit::Kilobytes,
        SizeUnit::Megabytes,
        SizeUnit::Gigabytes,
        SizeUnit::Terabytes,
        SizeUnit::Petabytes,
        SizeUnit::Exabytes,
        SizeUnit::Zettabytes,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            SizeUnit::Kilobytes => "KB",
            SizeUnit::Megabytes => "MB",
            SizeUnit::Gigabytes => "GB",
            SizeUnit::Terabytes => "TB",
            SizeUnit::Petabytes => "PB",
            SizeUnit::Exabytes => "EB",
            SizeUnit::Zettabytes => "ZB",
        }
    }
}

/// Size of a package's files, in whole kilobytes (1 KB = 1024 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageSize {
    kilobytes: u64,
}

impl PackageSize {
    pub fn from_kilobytes(kilobytes: u64) -> Self {
        Self { kilobytes }
    }

    /// Rounds up, so any non-empty package is at least 1 KB
    pub fn from_bytes(bytes: u64) -> Self {
        Self {
            kilobytes: bytes.div_ceil(1024),
        }
    }

    pub fn kilobytes(&self) -> u64 {
        self.kilobytes
    }

    /// Largest unit in which the size is at least 1, with the truncated value
    ///
    /// `1536` KB is `(1, Megabytes)`, `1023` KB is `(1023, Kilobytes)`.
    pub fn magnitude(&self) -> (u64, SizeUnit) {
        let mut value = self.kilobytes;
        let mut unit = SizeUnit::Kilobytes;
        for next in SizeUnit::ASCENDING.iter().skip(1) {
            if value < 1024 {
                break;
            }
            value /= 1024;
            unit = *next;
        }
        (value, unit)
    }
}

impl std::fmt::Display for PackageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (value, unit) = self.magnitude();
        write!(f, "{}{}", value, unit.suffix())
    }
}
