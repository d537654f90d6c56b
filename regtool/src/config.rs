//! TOML register table files
//!
//! ```toml
//! [[regions]]
//! name = "sfr"
//! start = 0xFF0000
//! length = 0xFC00
//! volatile = true
//!
//! [[registers]]
//! name = "CLK_AMBA_REG"
//! address = 0xFF4000
//! width = 2
//! ```

use anyhow::Context;
use serde::Deserialize;

use regload::{Permissions, RegionSpec, RegisterDescriptor, RegisterTable, Width};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableFile {
    #[serde(default)]
    regions: Vec<RegionEntry>,
    #[serde(default)]
    registers: Vec<RegisterEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionEntry {
    name: String,
    start: u32,
    length: u32,
    #[serde(default)]
    volatile: bool,
    #[serde(default)]
    initialized: bool,
    #[serde(default = "yes")]
    read: bool,
    #[serde(default = "yes")]
    write: bool,
    #[serde(default)]
    execute: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegisterEntry {
    name: String,
    address: u32,
    /// Scalar width in bytes: 1, 2 or 4.
    width: u32,
}

fn yes() -> bool {
    true
}

impl TableFile {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("could not parse table file")
    }

    pub fn into_parts(self) -> anyhow::Result<(Vec<RegionSpec>, RegisterTable)> {
        let regions = self
            .regions
            .into_iter()
            .map(|r| RegionSpec {
                name: r.name,
                start: r.start,
                length: r.length,
                volatile: r.volatile,
                initialized: r.initialized,
                perms: Permissions {
                    r: r.read,
                    w: r.write,
                    x: r.execute,
                },
            })
            .collect();

        let table = self
            .registers
            .into_iter()
            .map(|r| {
                let width = Width::try_from(r.width)
                    .with_context(|| format!("register {:?}", r.name))?;
                Ok(RegisterDescriptor::new(r.name, r.address, width))
            })
            .collect::<anyhow::Result<RegisterTable>>()?;

        Ok((regions, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_regions_and_registers() {
        let file = TableFile::parse(
            r#"
            [[regions]]
            name = "sfr"
            start = 0xFF0000
            length = 0xFC00
            volatile = true

            [[registers]]
            name = "CLK_AMBA_REG"
            address = 0xFF4000
            width = 2

            [[registers]]
            name = "CHIP_ID1_REG"
            address = 0xFFFBF8
            width = 1
            "#,
        )
        .unwrap();

        let (regions, table) = file.into_parts().unwrap();
        assert_eq!(regions.len(), 1);
        assert!(regions[0].volatile);
        assert!(regions[0].perms.r && regions[0].perms.w && !regions[0].perms.x);
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].width(), Width::Word);
        assert_eq!(table.entries()[1].address(), 0xFF_FBF8);
    }

    #[test]
    fn rejects_bad_width() {
        let file = TableFile::parse(
            r#"
            [[registers]]
            name = "ODD_REG"
            address = 0xFF4000
            width = 3
            "#,
        )
        .unwrap();
        let err = file.into_parts().unwrap_err();
        assert!(err.to_string().contains("ODD_REG"));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(
            TableFile::parse(
                r#"
                [[registers]]
                name = "A_REG"
                address = 1
                width = 2
                offset = 4
                "#
            )
            .is_err()
        );
    }
}
