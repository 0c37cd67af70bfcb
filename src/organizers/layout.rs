use crate::core::models::EngagementDirs;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// A folder in the engagement template. Leaves have no children.
#[derive(Debug)]
pub struct DirNode {
    pub name: &'static str,
    pub children: &'static [DirNode],
}

const fn leaf(name: &'static str) -> DirNode {
    DirNode { name, children: &[] }
}

const PHASES: &[DirNode] = &[
    leaf("Information-Gathering"),
    leaf("Vulnerability-Assessment"),
    leaf("Exploitation"),
    leaf("Post-Exploitation"),
    leaf("Lateral-Movement"),
];

pub const ENGAGEMENT_TEMPLATE: &[DirNode] = &[
    leaf("Pre-Engagement"),
    DirNode { name: "Linux", children: PHASES },
    DirNode { name: "Windows", children: PHASES },
    leaf("Reporting"),
    DirNode {
        name: "Results",
        children: &[
            leaf("Scan-Folder"),
            DirNode {
                name: "Discovered-Information",
                children: &[
                    leaf("New-IPs"),
                    leaf("Usernames"),
                    leaf("Passwords"),
                    leaf("Source-Code"),
                ],
            },
        ],
    },
];

/// Create `base` and every folder of `template` beneath it.
/// Existing folders are left alone, so repeated runs only fill in what is missing.
pub fn build_tree(base: &Path, template: &[DirNode]) -> Result<()> {
    fs::create_dir_all(base)
        .with_context(|| format!("Failed to create directory: {:?}", base))?;

    for node in template {
        let path = base.join(node.name);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;
        build_tree(&path, node.children)?;
    }

    Ok(())
}

pub fn prepare_engagement(output_dir: &Path, name: &str) -> Result<EngagementDirs> {
    let dirs = EngagementDirs::new(output_dir, name);
    build_tree(&dirs.root, ENGAGEMENT_TEMPLATE)?;

    if !dirs.scans.is_dir() {
        return Err(crate::core::errors::EsdrasError::Layout(format!(
            "scan folder missing after scaffold: {:?}",
            dirs.scans
        ))
        .into());
    }

    tracing::info!("Engagement workspace ready at {:?}", dirs.root);
    Ok(dirs)
}
