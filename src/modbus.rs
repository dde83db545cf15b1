use tokio_util::bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::trace;

/// The largest number of holding registers a single function 3 request may ask for.
pub const MAX_READ_COUNT: u16 = 125;

const READ_HOLDINGS: u8 = 3;
const WRITE_REGISTER: u8 = 6;
const EXCEPTION_FLAG: u8 = 0x80;
/// Transaction ID, protocol ID and length.
const MBAP_PREFIX: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub unit: u8,
    pub transaction_id: u16,
    pub operation: Operation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ReadHoldings { address: u16, count: u16 },
    WriteRegister { address: u16, value: u16 },
}

impl Operation {
    pub fn function_code(&self) -> u8 {
        match self {
            Operation::ReadHoldings { .. } => READ_HOLDINGS,
            Operation::WriteRegister { .. } => WRITE_REGISTER,
        }
    }

    pub fn address(&self) -> u16 {
        match *self {
            Operation::ReadHoldings { address, .. } | Operation::WriteRegister { address, .. } => {
                address
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub unit: u8,
    pub transaction_id: u16,
    pub kind: ResponseKind,
}

impl Response {
    /// Whether the device answered with an exception rather than the requested data.
    pub fn is_error(&self) -> bool {
        self.exception().is_some()
    }

    pub fn exception(&self) -> Option<Exception> {
        match &self.kind {
            ResponseKind::Exception { code, .. } => Some(Exception(*code)),
            ResponseKind::ReadHoldings { .. } | ResponseKind::WriteRegister { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseKind {
    Exception { function: u8, code: u8 },
    ReadHoldings { words: Vec<u16> },
    WriteRegister { address: u16, value: u16 },
}

/// Exception codes defined by the Modbus application protocol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, num_derive::FromPrimitive, strum::Display, strum::IntoStaticStr,
)]
#[repr(u8)]
pub enum ExceptionCode {
    #[strum(serialize = "illegal function")]
    IllegalFunction = 1,
    #[strum(serialize = "illegal data address")]
    IllegalDataAddress = 2,
    #[strum(serialize = "illegal data value")]
    IllegalDataValue = 3,
    #[strum(serialize = "server device failure")]
    ServerDeviceFailure = 4,
    #[strum(serialize = "acknowledge")]
    Acknowledge = 5,
    #[strum(serialize = "server device busy")]
    ServerBusy = 6,
    #[strum(serialize = "gateway path unavailable")]
    GatewayPathUnavailable = 0x0A,
    #[strum(serialize = "gateway target device failed to respond")]
    GatewayTargetFailed = 0x0B,
}

/// The raw exception code carried by an error response.
///
/// Codes outside of [`ExceptionCode`] are preserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exception(pub u8);

impl Exception {
    pub fn code(&self) -> Option<ExceptionCode> {
        num_traits::FromPrimitive::from_u8(self.0)
    }
}

impl std::fmt::Display for Exception {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{code} (exception {})", self.0),
            None => write!(f, "unknown exception {:#04x}", self.0),
        }
    }
}

#[derive(Debug, Default)]
pub struct ModbusTCPCodec {}

impl Encoder<Request> for ModbusTCPCodec {
    type Error = std::io::Error;
    fn encode(&mut self, req: Request, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let (address, argument) = match req.operation {
            Operation::ReadHoldings { address, count } => (address, count),
            Operation::WriteRegister { address, value } => (address, value),
        };
        dst.reserve(MBAP_PREFIX + 6);
        dst.extend(req.transaction_id.to_be_bytes());
        // Protocol 0, followed by the length of the unit byte and the PDU.
        dst.extend([0, 0, 0, 6, req.unit, req.operation.function_code()]);
        dst.extend(address.to_be_bytes());
        dst.extend(argument.to_be_bytes());
        trace!(message = "sending encoded", buffer = ?dst);
        Ok(())
    }
}

impl Decoder for ModbusTCPCodec {
    type Item = Response;
    type Error = std::io::Error;
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            trace!(message = "attempt at decoding", buffer = ?src);
            if src.len() < MBAP_PREFIX + 2 {
                return Ok(None);
            }
            let Some((tr_id_buffer, remainder)) = src.split_first_chunk::<2>() else {
                return Ok(None);
            };
            let transaction_id = u16::from_be_bytes(*tr_id_buffer);
            let Some((proto_buffer, remainder)) = remainder.split_first_chunk::<2>() else {
                return Ok(None);
            };
            if u16::from_be_bytes(*proto_buffer) != 0 {
                src.advance(1);
                continue;
            }
            let Some((length_buffer, remainder)) = remainder.split_first_chunk::<2>() else {
                return Ok(None);
            };
            let length = usize::from(u16::from_be_bytes(*length_buffer));
            let Some((data, _)) = remainder.split_at_checked(length) else {
                return Ok(None);
            };
            let [unit, function, pdu @ ..] = data else {
                src.advance(1);
                continue;
            };
            let (unit, function) = (*unit, *function);
            let kind = if function & EXCEPTION_FLAG != 0 {
                let [code, ..] = pdu else {
                    return Err(malformed("exception response without a code"));
                };
                ResponseKind::Exception { function: function & !EXCEPTION_FLAG, code: *code }
            } else {
                match function {
                    READ_HOLDINGS => {
                        let [byte_count, values @ ..] = pdu else {
                            return Err(malformed("read response without a byte count"));
                        };
                        if usize::from(*byte_count) != values.len() || values.len() % 2 != 0 {
                            return Err(malformed("read response byte count mismatch"));
                        }
                        let words = values
                            .chunks_exact(2)
                            .map(|w| u16::from_be_bytes([w[0], w[1]]))
                            .collect();
                        ResponseKind::ReadHoldings { words }
                    }
                    WRITE_REGISTER => {
                        let [a0, a1, v0, v1] = pdu else {
                            return Err(malformed("write response of unexpected length"));
                        };
                        ResponseKind::WriteRegister {
                            address: u16::from_be_bytes([*a0, *a1]),
                            value: u16::from_be_bytes([*v0, *v1]),
                        }
                    }
                    _ => {
                        trace!(message = "skipping unsupported function", function);
                        src.advance(MBAP_PREFIX + length);
                        continue;
                    }
                }
            };
            src.advance(MBAP_PREFIX + length);
            return Ok(Some(Response { unit, transaction_id, kind }));
        }
    }
}

fn malformed(what: &'static str) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, what)
}
