//! Generated configuration descriptors
//!
//! The package descriptor (`package.json`) and deployment descriptor
//! (`vercel.json`) are built as serde structures and rendered with
//! `serde_json::to_string_pretty`, so the written bytes are always the
//! serialization of the structure and nothing else.

use serde::Serialize;

use crate::error::RestageResult;

/// Output file name for the package descriptor
pub const PACKAGE_FILE: &str = "package.json";

/// Output file name for the deployment descriptor
pub const DEPLOY_FILE: &str = "vercel.json";

/// npm-style package descriptor for the scaffolded project
#[derive(Debug, Clone, Serialize)]
pub struct PackageDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub license: String,
    pub scripts: PackageScripts,
    pub keywords: Vec<String>,
    pub repository: Repository,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageScripts {
    pub dev: String,
    pub build: String,
    pub preview: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl Default for PackageDescriptor {
    fn default() -> Self {
        Self {
            name: "aimlab-xr-wireless".into(),
            version: "1.0.0".into(),
            description: "AIMLAB Wireless XR - Interactive AR Experience with Hand Tracking"
                .into(),
            author: "Pi Ko <pi.ko@nyu.edu>".into(),
            license: "MIT".into(),
            scripts: PackageScripts {
                dev: "npx serve .".into(),
                build: "echo 'No build step required'".into(),
                preview: "npx serve .".into(),
            },
            keywords: ["webxr", "ar", "vr", "hand-tracking", "aframe"]
                .map(String::from)
                .to_vec(),
            repository: Repository {
                kind: "git".into(),
                url: "https://github.com/yourusername/aimlab-xr-wireless".into(),
            },
        }
    }
}

/// Vercel deployment descriptor for a static WebXR site
///
/// WebXR needs cross-origin isolation headers and an explicit
/// `xr-spatial-tracking` permissions policy to run on deployed origins.
#[derive(Debug, Clone, Serialize)]
pub struct DeployDescriptor {
    pub version: u32,
    pub builds: Vec<Build>,
    pub routes: Vec<Route>,
    pub headers: Vec<HeaderRule>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Build {
    pub src: String,
    #[serde(rename = "use")]
    pub builder: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub src: String,
    pub dest: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderRule {
    pub source: String,
    pub headers: Vec<Header>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Default for DeployDescriptor {
    fn default() -> Self {
        Self {
            version: 2,
            builds: vec![Build {
                src: "index.html".into(),
                builder: "@vercel/static".into(),
            }],
            routes: vec![Route {
                src: "/(.*)".into(),
                dest: "/$1".into(),
            }],
            headers: vec![HeaderRule {
                source: "/(.*)".into(),
                headers: vec![
                    Header {
                        key: "Cross-Origin-Embedder-Policy".into(),
                        value: "require-corp".into(),
                    },
                    Header {
                        key: "Cross-Origin-Opener-Policy".into(),
                        value: "same-origin".into(),
                    },
                    Header {
                        key: "Permissions-Policy".into(),
                        value: "xr-spatial-tracking=(self)".into(),
                    },
                ],
            }],
        }
    }
}

/// Render a descriptor as indented JSON with a trailing newline
pub fn render<T: Serialize>(descriptor: &T) -> RestageResult<String> {
    let mut out = serde_json::to_string_pretty(descriptor)?;
    out.push('\n');
    Ok(out)
}
