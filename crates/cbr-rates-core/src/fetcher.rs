//! Retrieval and decoding of the daily rate document.
//!
//! The source answers with an XML document that usually declares the
//! `windows-1251` charset:
//!
//! ```text
//! <?xml version="1.0" encoding="windows-1251"?>
//! <ValCurs Date="02.03.2024" name="Foreign Currency Market">
//!     <Valute ID="R01235">
//!         <NumCode>840</NumCode>
//!         <CharCode>USD</CharCode>
//!         <Nominal>1</Nominal>
//!         <Name>US Dollar</Name>
//!         <Value>91,6359</Value>
//!     </Valute>
//! </ValCurs>
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1251};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

use crate::config::FetcherConfig;
use crate::http_client::{HttpClient, HttpRequest};
use crate::{Currency, DecodeError, Document, RateDate, RateError};

const ROOT_ELEMENT: &str = "ValCurs";
const ACCEPT: &str = "application/xml, text/xml";

/// Fetches and parses the rate document for a given day.
#[derive(Clone, Default)]
pub struct DocumentFetcher {
    http_client: Option<Arc<dyn HttpClient>>,
    config: FetcherConfig,
}

impl Debug for DocumentFetcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentFetcher")
            .field("has_http_client", &self.http_client.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl DocumentFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client: Some(http_client),
            config: FetcherConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FetcherConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_config(&mut self, config: FetcherConfig) {
        self.config = config;
    }

    pub fn set_http_client(&mut self, http_client: Option<Arc<dyn HttpClient>>) {
        self.http_client = http_client;
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    pub fn request_url(&self, date: RateDate) -> String {
        format!("{}?date_req={}", self.config.base_url, date.query_param())
    }

    /// Request, decode and parse the document for `date`.
    ///
    /// A missing transport fails before any request is built. Transport
    /// failures, non-2xx statuses and undecodable bodies surface unchanged;
    /// nothing is retried here.
    pub async fn fetch(&self, date: RateDate) -> Result<Document, RateError> {
        let http_client = self.http_client.as_ref().ok_or(RateError::MissingTransport)?;

        let url = self.request_url(date);
        tracing::debug!(%url, "requesting daily rate document");

        let request = HttpRequest::get(url)
            .with_header("Accept", ACCEPT)
            .with_timeout_ms(self.config.timeout_ms);
        let response = http_client.execute(request).await?;

        if !response.is_success() {
            tracing::warn!(status = response.status, %date, "rate source returned non-success status");
            return Err(RateError::RemoteStatus {
                status: response.status,
            });
        }

        let document = parse_document(&response.body)?;
        tracing::debug!(
            %date,
            source_date = %document.date,
            currencies = document.currencies.len(),
            "parsed daily rate document"
        );
        Ok(document)
    }
}

/// Decode raw response bytes into a [`Document`].
///
/// The charset comes from the XML declaration: `windows-1251` is transcoded,
/// UTF-8 (or no declaration) is read as is, anything else is rejected.
pub fn parse_document(body: &[u8]) -> Result<Document, DecodeError> {
    let prolog = scan_prolog(body)?;

    match prolog.root.as_deref() {
        Some(ROOT_ELEMENT) => {}
        Some(other) => {
            return Err(DecodeError::Malformed {
                message: format!("unexpected root element <{other}>"),
            })
        }
        None => {
            return Err(DecodeError::Malformed {
                message: String::from("document has no root element"),
            })
        }
    }

    let text = decode_text(body, prolog.charset.as_deref())?;
    let wire: WireDocument =
        quick_xml::de::from_str(&text).map_err(|error| DecodeError::Malformed {
            message: error.to_string(),
        })?;

    Ok(wire.into())
}

#[derive(Debug, Default)]
struct Prolog {
    charset: Option<String>,
    root: Option<String>,
}

/// Read the declared charset and the root element name.
///
/// Both live in the ASCII-compatible head of the document, so the bytes can be
/// scanned before the charset is known.
fn scan_prolog(body: &[u8]) -> Result<Prolog, DecodeError> {
    let mut reader = Reader::from_reader(body);
    let mut prolog = Prolog::default();

    loop {
        match reader.read_event() {
            Ok(Event::Decl(decl)) => {
                prolog.charset = match decl.encoding() {
                    Some(Ok(label)) => Some(String::from_utf8_lossy(&label).into_owned()),
                    Some(Err(error)) => {
                        return Err(DecodeError::Malformed {
                            message: error.to_string(),
                        })
                    }
                    None => None,
                };
            }
            Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
                prolog.root = Some(String::from_utf8_lossy(start.name().as_ref()).into_owned());
                return Ok(prolog);
            }
            Ok(Event::Eof) => return Ok(prolog),
            Ok(_) => {}
            Err(error) => {
                return Err(DecodeError::Malformed {
                    message: error.to_string(),
                })
            }
        }
    }
}

fn decode_text(body: &[u8], charset: Option<&str>) -> Result<String, DecodeError> {
    let encoding = match charset {
        None => UTF_8,
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .filter(|encoding| *encoding == UTF_8 || *encoding == WINDOWS_1251)
            .ok_or_else(|| DecodeError::UnsupportedCharset {
                charset: label.to_string(),
            })?,
    };

    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        return Err(DecodeError::InvalidText {
            charset: encoding.name(),
        });
    }
    Ok(text.into_owned())
}

#[derive(Debug, Deserialize)]
struct WireDocument {
    #[serde(rename = "@Date", default)]
    date: String,
    #[serde(rename = "@name", default)]
    name: Option<String>,
    #[serde(rename = "Valute", default)]
    currencies: Vec<WireCurrency>,
}

#[derive(Debug, Deserialize)]
struct WireCurrency {
    #[serde(rename = "@ID", default)]
    id: String,
    #[serde(rename = "NumCode")]
    num_code: u32,
    #[serde(rename = "CharCode")]
    char_code: String,
    #[serde(rename = "Nominal")]
    nominal: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Value")]
    value: String,
}

impl From<WireDocument> for Document {
    fn from(wire: WireDocument) -> Self {
        Self {
            date: wire.date,
            name: wire.name,
            currencies: wire.currencies.into_iter().map(Currency::from).collect(),
        }
    }
}

impl From<WireCurrency> for Currency {
    fn from(wire: WireCurrency) -> Self {
        Self {
            id: wire.id,
            num_code: wire.num_code,
            char_code: wire.char_code.trim().to_string(),
            nominal: wire.nominal,
            name: wire.name,
            value: wire.value.trim().to_string(),
        }
    }
}
