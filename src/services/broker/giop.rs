//! GIOP 1.0 message framing.

use super::{
    cdr::{ByteOrder, CdrReader, CdrWriter},
    error::{BrokerError, Result},
};

/// Size of every GIOP message header.
pub const HEADER_LEN: usize = 12;

const MAGIC: &[u8; 4] = b"GIOP";
const VERSION: (u8, u8) = (1, 0);
const SIZE_OFFSET: usize = 8;

/// GIOP message kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    /// Operation invocation
    Request,
    /// Answer to a request
    Reply,
    /// Request cancellation
    CancelRequest,
    /// Object location query
    LocateRequest,
    /// Answer to a location query
    LocateReply,
    /// Peer is closing the connection
    CloseConnection,
    /// Peer could not parse a message
    MessageError,
}

impl MessageType {
    fn code(self) -> u8 {
        match self {
            Self::Request => 0,
            Self::Reply => 1,
            Self::CancelRequest => 2,
            Self::LocateRequest => 3,
            Self::LocateReply => 4,
            Self::CloseConnection => 5,
            Self::MessageError => 6,
        }
    }

    fn from_code(code: u8) -> Result<Self> {
        Ok(match code {
            0 => Self::Request,
            1 => Self::Reply,
            2 => Self::CancelRequest,
            3 => Self::LocateRequest,
            4 => Self::LocateReply,
            5 => Self::CloseConnection,
            6 => Self::MessageError,
            other => return Err(BrokerError::Protocol(format!("unknown message type {other}"))),
        })
    }
}

/// Decoded message header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    /// Byte order of the body
    pub order: ByteOrder,
    /// Message kind
    pub message_type: MessageType,
    /// Body length following the header
    pub body_len: u32,
}

impl MessageHeader {
    /// Decode the fixed-size header.
    ///
    /// # Errors
    /// Returns error on a bad magic, an unsupported version or an unknown
    /// message type.
    pub fn parse(bytes: &[u8; HEADER_LEN]) -> Result<Self> {
        if &bytes[..4] != MAGIC {
            return Err(BrokerError::Protocol("bad GIOP magic".to_string()));
        }
        if bytes[4] != 1 {
            return Err(BrokerError::Protocol(format!(
                "unsupported GIOP version {}.{}",
                bytes[4], bytes[5]
            )));
        }

        let order = ByteOrder::from_flag(bytes[6]);
        let message_type = MessageType::from_code(bytes[7])?;
        let mut reader = CdrReader::new(bytes, order);
        reader.seek(SIZE_OFFSET);

        Ok(Self {
            order,
            message_type,
            body_len: reader.read_u32()?,
        })
    }
}

/// Outgoing operation invocation
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    /// Correlates the reply
    pub request_id: u32,
    /// False for oneway operations
    pub response_expected: bool,
    /// Target object
    pub object_key: &'a [u8],
    /// Operation name
    pub operation: &'a str,
}

impl Request<'_> {
    /// Encode the whole message; `arguments` appends the in parameters.
    pub fn encode(&self, order: ByteOrder, arguments: impl FnOnce(&mut CdrWriter)) -> Vec<u8> {
        let mut writer = CdrWriter::new(order);
        writer.write_raw(MAGIC);
        writer.write_octet(VERSION.0);
        writer.write_octet(VERSION.1);
        writer.write_octet(order.flag());
        writer.write_octet(MessageType::Request.code());
        writer.write_u32(0);

        // no service contexts
        writer.write_u32(0);
        writer.write_u32(self.request_id);
        writer.write_bool(self.response_expected);
        writer.write_octets(self.object_key);
        writer.write_string(self.operation);
        // empty principal
        writer.write_octets(&[]);
        arguments(&mut writer);

        let body_len = (writer.len() - HEADER_LEN) as u32;
        writer.patch_u32(SIZE_OFFSET, body_len);
        writer.into_bytes()
    }
}

/// Outcome carried by a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyStatus {
    /// Operation succeeded; results follow
    NoException,
    /// Operation raised a declared exception
    UserException(String),
    /// Operation raised a system exception
    SystemException {
        /// Repository id
        id: String,
        /// Vendor minor code
        minor: u32,
        /// Completion status
        completed: u32,
    },
    /// Object moved
    LocationForward,
}

impl ReplyStatus {
    /// `Ok` for a normal reply, the matching error otherwise.
    ///
    /// # Errors
    /// Returns the exception or forward carried by the reply.
    pub fn check(self) -> Result<()> {
        match self {
            Self::NoException => Ok(()),
            Self::UserException(id) => Err(BrokerError::UserException(id)),
            Self::SystemException {
                id,
                minor,
                completed,
            } => Err(BrokerError::SystemException {
                id,
                minor,
                completed,
            }),
            Self::LocationForward => Err(BrokerError::LocationForward),
        }
    }
}

/// Decoded reply, with a reader positioned on the results
#[derive(Debug)]
pub struct Reply<'a> {
    /// Request being answered
    pub request_id: u32,
    /// Outcome
    pub status: ReplyStatus,
    /// Results, valid when `status` is [`ReplyStatus::NoException`]
    pub body: CdrReader<'a>,
}

impl<'a> Reply<'a> {
    /// Decode a full reply message, header included.
    ///
    /// # Errors
    /// Returns error if the message is not a well-formed reply.
    pub fn decode(message: &'a [u8]) -> Result<Self> {
        let header_bytes: &[u8; HEADER_LEN] = message
            .get(..HEADER_LEN)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(BrokerError::Truncated {
                needed: HEADER_LEN,
                offset: 0,
            })?;
        let header = MessageHeader::parse(header_bytes)?;
        if header.message_type != MessageType::Reply {
            return Err(BrokerError::Protocol(format!(
                "expected a reply, got {:?}",
                header.message_type
            )));
        }

        let mut body = CdrReader::new(message, header.order);
        body.seek(HEADER_LEN);

        let contexts = body.read_u32()?;
        for _ in 0..contexts {
            body.read_u32()?;
            body.read_octets()?;
        }

        let request_id = body.read_u32()?;
        let status = match body.read_u32()? {
            0 => ReplyStatus::NoException,
            1 => ReplyStatus::UserException(body.read_string()?),
            2 => ReplyStatus::SystemException {
                id: body.read_string()?,
                minor: body.read_u32()?,
                completed: body.read_u32()?,
            },
            3 => ReplyStatus::LocationForward,
            other => return Err(BrokerError::Protocol(format!("unknown reply status {other}"))),
        };

        Ok(Self {
            request_id,
            status,
            body,
        })
    }
}

/// Encode a reply message.
#[cfg(test)]
pub(crate) fn encode_reply(
    order: ByteOrder,
    request_id: u32,
    status: &ReplyStatus,
    results: impl FnOnce(&mut CdrWriter),
) -> Vec<u8> {
    let mut writer = CdrWriter::new(order);
    writer.write_raw(MAGIC);
    writer.write_octet(VERSION.0);
    writer.write_octet(VERSION.1);
    writer.write_octet(order.flag());
    writer.write_octet(MessageType::Reply.code());
    writer.write_u32(0);

    writer.write_u32(0);
    writer.write_u32(request_id);
    match status {
        ReplyStatus::NoException => {
            writer.write_u32(0);
            results(&mut writer);
        }
        ReplyStatus::UserException(id) => {
            writer.write_u32(1);
            writer.write_string(id);
        }
        ReplyStatus::SystemException {
            id,
            minor,
            completed,
        } => {
            writer.write_u32(2);
            writer.write_string(id);
            writer.write_u32(*minor);
            writer.write_u32(*completed);
        }
        ReplyStatus::LocationForward => writer.write_u32(3),
    }

    let body_len = (writer.len() - HEADER_LEN) as u32;
    writer.patch_u32(SIZE_OFFSET, body_len);
    writer.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_layout() {
        let request = Request {
            request_id: 7,
            response_expected: true,
            object_key: b"key",
            operation: "exit",
        };

        let bytes = request.encode(ByteOrder::Big, |_| {});
        let header = MessageHeader::parse(bytes[..HEADER_LEN].try_into().unwrap()).unwrap();

        assert_eq!(&bytes[..8], b"GIOP\x01\x00\x00\x00");
        assert_eq!(header.body_len as usize, bytes.len() - HEADER_LEN);

        let mut reader = CdrReader::new(&bytes, ByteOrder::Big);
        reader.seek(HEADER_LEN);
        assert_eq!(reader.read_u32().unwrap(), 0);
        assert_eq!(reader.read_u32().unwrap(), 7);
        assert!(reader.read_bool().unwrap());
        assert_eq!(reader.read_octets().unwrap(), b"key");
        assert_eq!(reader.read_string().unwrap(), "exit");
        assert_eq!(reader.read_octets().unwrap(), b"");
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn system_exception_reply_is_decoded() {
        let status = ReplyStatus::SystemException {
            id: "IDL:omg.org/CORBA/OBJECT_NOT_EXIST:1.0".to_string(),
            minor: 0x4f4d_0001,
            completed: 1,
        };
        let bytes = encode_reply(ByteOrder::Little, 3, &status, |_| {});

        let reply = Reply::decode(&bytes).unwrap();

        assert_eq!(reply.request_id, 3);
        assert_eq!(reply.status, status);
    }

    #[test]
    fn non_reply_messages_are_rejected() {
        let request = Request {
            request_id: 1,
            response_expected: false,
            object_key: b"",
            operation: "exit",
        };
        let bytes = request.encode(ByteOrder::Big, |_| {});

        assert!(matches!(Reply::decode(&bytes), Err(BrokerError::Protocol(_))));
        assert!(matches!(
            Reply::decode(b"GIOP"),
            Err(BrokerError::Truncated { .. })
        ));
        assert!(matches!(
            MessageHeader::parse(b"HTTP/1.1 200"),
            Err(BrokerError::Protocol(_))
        ));
    }
}
