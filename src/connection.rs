use crate::modbus::{ModbusTCPCodec, Operation, Request, Response};
use futures::{SinkExt as _, StreamExt as _};
use std::future::Future;
use tokio::net::TcpStream;
use tokio::time::Instant;
use tokio_util::codec::Framed;
use tracing::{debug, info, trace, warn};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("lookup of `{1}` failed")]
    LookupHost(#[source] std::io::Error, String),
    #[error("`{0}` did not resolve to any address")]
    NoAddresses(String),
    #[error("could not connect to `{1}` over TCP")]
    Connect(#[source] std::io::Error, String),
    #[error("connecting to `{0}` timed out")]
    ConnectTimeout(String),
    #[error("could not send out the request")]
    Send(#[source] std::io::Error),
    #[error("sending the request timed out")]
    SendTimeout,
    #[error("could not read data from the stream")]
    Receive(#[source] std::io::Error),
    #[error("no response to transaction {0} within the read timeout")]
    ReadTimeout(u16),
    #[error("the device closed the connection")]
    Closed,
    #[error("could not shut down the connection")]
    Shutdown(#[source] std::io::Error),
}

#[derive(clap::Parser, Clone, Debug)]
#[group(id = "connection::Args")]
pub struct Args {
    /// Hostname or IP address of the GX device.
    #[arg(long)]
    pub host: String,

    /// The Modbus/TCP port of the GX device.
    #[arg(long, default_value = "502")]
    pub port: u16,

    /// If the modbus response isn't received in this amount of time, consider the request failed.
    #[arg(long, default_value = "1s")]
    pub read_timeout: humantime::Duration,

    /// Give up on connecting or sending a request after this amount of time.
    #[arg(long, default_value = "3s")]
    pub send_timeout: humantime::Duration,
}

impl Args {
    fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Something that can carry a single Modbus request to a device and bring back its response.
///
/// Implementations are driven by [`Endpoint`], which guarantees that at most one exchange is in
/// flight at any time.
pub trait Transport: Send {
    /// Establish the connection, if not connected already.
    fn connect(&mut self) -> impl Future<Output = Result<(), Error>> + Send;
    /// Send out `operation` addressed to `unit` and wait for the matching response.
    ///
    /// Modbus exceptions are a successful exchange: see [`Response::is_error`].
    fn exchange(
        &mut self,
        unit: u8,
        operation: Operation,
    ) -> impl Future<Output = Result<Response, Error>> + Send;
    fn close(&mut self) -> impl Future<Output = Result<(), Error>> + Send;
}

type TcpIo = Framed<TcpStream, ModbusTCPCodec>;

/// Modbus/TCP over a single, lazily (re-)established TCP connection.
pub struct TcpTransport {
    args: Args,
    io: Option<TcpIo>,
    next_transaction_id: u16,
}

impl TcpTransport {
    pub fn new(args: Args) -> Self {
        Self { args, io: None, next_transaction_id: 0 }
    }

    fn new_transaction_id(&mut self) -> u16 {
        let id = self.next_transaction_id;
        self.next_transaction_id = self.next_transaction_id.wrapping_add(1);
        id
    }

    async fn round_trip(&mut self, request: Request) -> Result<Response, Error> {
        let Some(io) = self.io.as_mut() else {
            return Err(Error::Closed);
        };
        tokio::time::timeout(*self.args.send_timeout, io.send(request))
            .await
            .map_err(|_| Error::SendTimeout)?
            .map_err(Error::Send)?;
        let deadline = Instant::now() + *self.args.read_timeout;
        loop {
            let response = match tokio::time::timeout_at(deadline, io.next()).await {
                Err(_) => return Err(Error::ReadTimeout(request.transaction_id)),
                Ok(None) => return Err(Error::Closed),
                Ok(Some(response)) => response.map_err(Error::Receive)?,
            };
            if response.transaction_id != request.transaction_id {
                // A late answer to a request that has already timed out.
                debug!(
                    message = "a response we were not expecting",
                    transaction = response.transaction_id,
                    expected = request.transaction_id
                );
                continue;
            }
            trace!(message = "decoded a response", transaction = response.transaction_id);
            return Ok(response);
        }
    }
}

impl Transport for TcpTransport {
    async fn connect(&mut self) -> Result<(), Error> {
        if self.io.is_some() {
            return Ok(());
        }
        let address = self.args.address();
        info!(message = "connecting...", address);
        let addresses = tokio::net::lookup_host(&address)
            .await
            .map_err(|e| Error::LookupHost(e, address.clone()))?
            .collect::<Vec<_>>();
        debug!(message = "resolved", ?addresses);
        if addresses.is_empty() {
            return Err(Error::NoAddresses(address));
        }
        let socket = tokio::time::timeout(*self.args.send_timeout, TcpStream::connect(&*addresses))
            .await
            .map_err(|_| Error::ConnectTimeout(address.clone()))?
            .map_err(|e| Error::Connect(e, address.clone()))?;
        let nodelay_result = socket.set_nodelay(true);
        trace!(message = "setting nodelay", is_error = ?nodelay_result.err());
        info!(message = "connected", address);
        self.io = Some(Framed::new(socket, ModbusTCPCodec::default()));
        Ok(())
    }

    async fn exchange(&mut self, unit: u8, operation: Operation) -> Result<Response, Error> {
        self.connect().await?;
        let transaction_id = self.new_transaction_id();
        let request = Request { unit, transaction_id, operation };
        let result = self.round_trip(request).await;
        if let Err(e) = &result {
            // The stream may now be out of sync with our transactions, start afresh next time.
            warn!(
                message = "exchange failed, dropping the connection",
                unit,
                error = (e as &dyn std::error::Error)
            );
            self.io = None;
        }
        result
    }

    async fn close(&mut self) -> Result<(), Error> {
        if let Some(mut io) = self.io.take() {
            io.close().await.map_err(Error::Shutdown)?;
            info!(message = "disconnected");
        }
        Ok(())
    }
}

/// A Modbus server reachable over some [`Transport`], shared between all users.
///
/// Every operation holds the endpoint-wide lock for the duration of the exchange, so requests
/// never interleave on the wire.
pub struct Endpoint<T> {
    transport: tokio::sync::Mutex<T>,
}

impl<T: Transport> Endpoint<T> {
    pub fn new(transport: T) -> Self {
        Self { transport: tokio::sync::Mutex::new(transport) }
    }

    pub async fn connect(&self) -> Result<(), Error> {
        self.transport.lock().await.connect().await
    }

    /// Modbus function 3.
    pub async fn read_holding(&self, unit: u8, address: u16, count: u16) -> Result<Response, Error> {
        let mut transport = self.transport.lock().await;
        transport.exchange(unit, Operation::ReadHoldings { address, count }).await
    }

    /// Modbus function 6.
    pub async fn write_register(&self, unit: u8, address: u16, value: u16) -> Result<Response, Error> {
        let mut transport = self.transport.lock().await;
        transport.exchange(unit, Operation::WriteRegister { address, value }).await
    }

    pub async fn close(&self) -> Result<(), Error> {
        self.transport.lock().await.close().await
    }

    /// Direct access to the transport, for inspection in tests.
    #[cfg(test)]
    pub(crate) async fn transport(&self) -> tokio::sync::MutexGuard<'_, T> {
        self.transport.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modbus::ResponseKind;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};
    use tokio::net::TcpListener;

    fn args(port: u16) -> Args {
        Args {
            host: "127.0.0.1".into(),
            port,
            read_timeout: Duration::from_millis(200).into(),
            send_timeout: Duration::from_secs(1).into(),
        }
    }

    async fn read_request(socket: &mut TcpStream) -> [u8; 12] {
        let mut request = [0; 12];
        socket.read_exact(&mut request).await.unwrap();
        request
    }

    #[tokio::test]
    async fn reads_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            assert_eq!(&request[2..], &[0, 0, 0, 6, 100, 3, 0x03, 0x20, 0, 1]);
            // A stale answer first, which must be skipped.
            let stale = [request[0], request[1].wrapping_add(9), 0, 0, 0, 5, 100, 3, 2, 0, 0];
            socket.write_all(&stale).await.unwrap();
            let answer = [request[0], request[1], 0, 0, 0, 5, 100, 3, 2, 0x13, 0x88];
            socket.write_all(&answer).await.unwrap();
            socket
        });
        let endpoint = Endpoint::new(TcpTransport::new(args(port)));
        let response = endpoint.read_holding(100, 800, 1).await.unwrap();
        assert_eq!(response.kind, ResponseKind::ReadHoldings { words: vec![0x1388] });
        drop(server.await.unwrap());
    }

    #[tokio::test]
    async fn timeout_drops_connection_and_reconnects() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            let (mut silent, _) = listener.accept().await.unwrap();
            let _ = read_request(&mut silent).await;
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let answer = [request[0], request[1], 0, 0, 0, 6, 1, 6, 0, 37, 0xFA, 0x24];
            socket.write_all(&answer).await.unwrap();
            (silent, socket)
        });
        let endpoint = Endpoint::new(TcpTransport::new(args(port)));
        let error = endpoint.write_register(1, 37, 0xFA24).await.unwrap_err();
        assert!(matches!(error, Error::ReadTimeout(_)), "{error:?}");
        assert!(endpoint.transport().await.io.is_none());
        let response = endpoint.write_register(1, 37, 0xFA24).await.unwrap();
        assert_eq!(response.kind, ResponseKind::WriteRegister { address: 37, value: 0xFA24 });
        drop(server.await.unwrap());
    }

    #[tokio::test]
    async fn connection_refused_is_reported() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let endpoint = Endpoint::new(TcpTransport::new(args(port)));
        let error = endpoint.connect().await.unwrap_err();
        assert!(matches!(error, Error::Connect(..)), "{error:?}");
    }
}
