use std::{fmt, path::Path, str::FromStr};

use tracing::debug;

use super::{
    cdr::{ByteOrder, CdrReader, CdrWriter},
    error::{BrokerError, Result},
};

/// Profile tag of an IIOP endpoint.
pub const TAG_INTERNET_IOP: u32 = 0;

const PREFIX: &str = "IOR:";

/// One profile of an object reference, still encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedProfile {
    /// Profile kind
    pub tag: u32,
    /// Profile encapsulation
    pub data: Vec<u8>,
}

/// Interoperable object reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ior {
    /// Repository id of the object's most derived interface
    pub type_id: String,
    /// Ways to reach the object
    pub profiles: Vec<TaggedProfile>,
}

/// Endpoint of an object reachable over TCP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IiopProfile {
    /// Protocol version as (major, minor)
    pub version: (u8, u8),
    /// Host name or address
    pub host: String,
    /// TCP port
    pub port: u16,
    /// Key identifying the object within its server
    pub object_key: Vec<u8>,
}

impl Ior {
    /// Read the reference stored on the first line of `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not hold a reference.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| BrokerError::IorFile {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "Read object reference");
        content.lines().next().unwrap_or_default().parse()
    }

    /// First IIOP profile of the reference.
    ///
    /// # Errors
    /// Returns error if there is none or it cannot be decoded.
    pub fn iiop_profile(&self) -> Result<IiopProfile> {
        let profile = self
            .profiles
            .iter()
            .find(|profile| profile.tag == TAG_INTERNET_IOP)
            .ok_or(BrokerError::NoIiopProfile)?;

        IiopProfile::decode(&profile.data)
    }
}

impl FromStr for Ior {
    type Err = BrokerError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex_part = s
            .get(..PREFIX.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(PREFIX))
            .map(|_| &s[PREFIX.len()..])
            .ok_or_else(|| BrokerError::InvalidIor("missing 'IOR:' prefix".to_string()))?;

        let bytes = hex::decode(hex_part).map_err(|e| BrokerError::InvalidIor(e.to_string()))?;
        let mut reader = CdrReader::encapsulation(&bytes)?;

        let type_id = reader.read_string()?;
        let count = reader.read_u32()?;
        let mut profiles = Vec::new();
        for _ in 0..count {
            let tag = reader.read_u32()?;
            let data = reader.read_octets()?.to_vec();
            profiles.push(TaggedProfile { tag, data });
        }

        Ok(Self { type_id, profiles })
    }
}

impl fmt::Display for Ior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = CdrWriter::encapsulation(ByteOrder::Big);
        writer.write_string(&self.type_id);
        writer.write_u32(self.profiles.len() as u32);
        for profile in &self.profiles {
            writer.write_u32(profile.tag);
            writer.write_octets(&profile.data);
        }

        write!(f, "{PREFIX}{}", hex::encode(writer.into_bytes()))
    }
}

impl IiopProfile {
    /// Decode an IIOP profile body.
    ///
    /// # Errors
    /// Returns error if the body is malformed.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut reader = CdrReader::encapsulation(data)?;
        let major = reader.read_octet()?;
        let minor = reader.read_octet()?;
        let host = reader.read_string()?;
        let port = reader.read_u16()?;
        let object_key = reader.read_octets()?.to_vec();

        Ok(Self {
            version: (major, minor),
            host,
            port,
            object_key,
        })
    }

    /// Encode as a tagged profile.
    pub fn to_tagged(&self) -> TaggedProfile {
        let mut writer = CdrWriter::encapsulation(ByteOrder::Big);
        writer.write_octet(self.version.0);
        writer.write_octet(self.version.1);
        writer.write_string(&self.host);
        writer.write_u16(self.port);
        writer.write_octets(&self.object_key);

        TaggedProfile {
            tag: TAG_INTERNET_IOP,
            data: writer.into_bytes(),
        }
    }

    /// `host:port` of the endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
