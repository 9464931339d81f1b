use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
};
use tracing::{debug, info, instrument};

use super::{
    cdr::{ByteOrder, CdrWriter},
    error::{BrokerError, Result},
    giop::{HEADER_LEN, MessageHeader, MessageType, Reply, Request},
    ior::{IiopProfile, Ior},
    types::{Position, PositionKey, PositionOrigin},
};

/// Largest message body accepted from the peer.
pub const MAX_MESSAGE_LEN: u32 = 4 * 1024 * 1024;

/// Client of the player's media control object
///
/// Holds one IIOP connection; requests are sent one at a time and each
/// reply is read before the next request goes out.
pub struct MediaControlClient {
    stream: TcpStream,
    profile: IiopProfile,
    endpoint: String,
    order: ByteOrder,
    next_request_id: u32,
}

impl MediaControlClient {
    /// Connect to the object designated by `ior`.
    ///
    /// # Errors
    /// Returns error if the reference has no IIOP profile or the TCP
    /// connection fails.
    #[instrument(skip(ior), fields(type_id = %ior.type_id))]
    pub async fn connect(ior: &Ior) -> Result<Self> {
        let profile = ior.iiop_profile()?;
        let endpoint = profile.endpoint();

        let stream = TcpStream::connect((profile.host.as_str(), profile.port))
            .await
            .map_err(|source| BrokerError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        info!(%endpoint, "Connected to media control object");

        Ok(Self {
            stream,
            profile,
            endpoint,
            order: ByteOrder::native(),
            next_request_id: 0,
        })
    }

    /// Endpoint this client talks to.
    pub fn profile(&self) -> &IiopProfile {
        &self.profile
    }

    /// Current media position expressed in `key` units from `origin`.
    ///
    /// # Errors
    /// Returns error on transport failures, malformed replies, or when the
    /// object raises an exception.
    #[instrument(skip(self))]
    pub async fn get_media_position(
        &mut self,
        origin: PositionOrigin,
        key: PositionKey,
    ) -> Result<Position> {
        let request_id = self
            .send("get_media_position", true, |args| {
                args.write_u32(origin.code());
                args.write_u32(key.code());
            })
            .await?;

        let message = self.receive().await?;
        let mut reply = Reply::decode(&message)?;
        if reply.request_id != request_id {
            return Err(BrokerError::Protocol(format!(
                "reply to request {} while waiting for {request_id}",
                reply.request_id
            )));
        }
        reply.status.check()?;

        let position = Position {
            origin: PositionOrigin::try_from(reply.body.read_u32()?)?,
            key: PositionKey::try_from(reply.body.read_u32()?)?,
            value: reply.body.read_i64()?,
        };
        debug!(%position, "Fetched media position");

        Ok(position)
    }

    /// Ask the player to exit. Failures are ignored.
    pub async fn exit(mut self) {
        match self.send("exit", false, |_| {}).await {
            Ok(_) => debug!("Exit sent"),
            Err(e) => debug!(error = %e, "Exit failed, ignored"),
        }
    }

    async fn send(
        &mut self,
        operation: &str,
        response_expected: bool,
        arguments: impl FnOnce(&mut CdrWriter),
    ) -> Result<u32> {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);

        let message = Request {
            request_id,
            response_expected,
            object_key: &self.profile.object_key,
            operation,
        }
        .encode(self.order, arguments);

        self.stream
            .write_all(&message)
            .await
            .map_err(|source| self.transport(source))?;
        debug!(operation, request_id, "Request sent");

        Ok(request_id)
    }

    async fn receive(&mut self) -> Result<Vec<u8>> {
        let mut header = [0u8; HEADER_LEN];
        self.stream
            .read_exact(&mut header)
            .await
            .map_err(|source| self.transport(source))?;

        let parsed = MessageHeader::parse(&header)?;
        match parsed.message_type {
            MessageType::CloseConnection => {
                return Err(BrokerError::Protocol("peer closed the connection".to_string()));
            }
            MessageType::MessageError => {
                return Err(BrokerError::Protocol("peer rejected the request".to_string()));
            }
            _ => {}
        }

        if parsed.body_len > MAX_MESSAGE_LEN {
            return Err(BrokerError::Protocol(format!(
                "message body of {} bytes exceeds the {MAX_MESSAGE_LEN} byte limit",
                parsed.body_len
            )));
        }

        let mut message = header.to_vec();
        message.resize(HEADER_LEN + parsed.body_len as usize, 0);
        self.stream
            .read_exact(&mut message[HEADER_LEN..])
            .await
            .map_err(|source| self.transport(source))?;

        Ok(message)
    }

    fn transport(&self, source: std::io::Error) -> BrokerError {
        BrokerError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}
