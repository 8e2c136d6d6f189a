use super::{IVatVerifier, VerifierError};
use company_registry_domain::CheckVatResult;
use reqwest::Client;
use std::time::Duration;
use tracing::error;

/// Client for the VIES `checkVat` SOAP operation.
pub struct ViesVatVerifier {
    client: Client,
    endpoint: String,
}

impl ViesVatVerifier {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("VAT registry HTTP client to be buildable");
        Self { client, endpoint }
    }
}

fn check_vat_envelope(country_code: &str, vat_number: &str) -> String {
    format!(
        r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:urn="urn:ec.europa.eu:taxud:vies:services:checkVat:types">
  <soapenv:Header/>
  <soapenv:Body>
    <urn:checkVat>
      <urn:countryCode>{}</urn:countryCode>
      <urn:vatNumber>{}</urn:vatNumber>
    </urn:checkVat>
  </soapenv:Body>
</soapenv:Envelope>"#,
        quick_xml::escape::escape(country_code),
        quick_xml::escape::escape(vat_number)
    )
}

/// The registry reports undisclosed name/address fields as `"---"`.
fn disclosed(text: String) -> Option<String> {
    if text.is_empty() || text == "---" {
        None
    } else {
        Some(text)
    }
}

fn parse_check_vat_response(xml: &str) -> Result<CheckVatResult, VerifierError> {
    use quick_xml::events::Event;
    use quick_xml::reader::Reader;

    let mut reader = Reader::from_str(xml);

    let mut current_tag = String::new();
    let mut fault: Option<String> = None;
    let mut country_code = String::new();
    let mut vat_number = String::new();
    let mut request_date: Option<String> = None;
    let mut valid: Option<bool> = None;
    let mut name: Option<String> = None;
    let mut address: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                // Tags come back namespaced (ns2:valid); match on local names.
                current_tag = tag.rsplit(':').next().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => current_tag.clear(),
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default().trim().to_string();
                match current_tag.as_str() {
                    "countryCode" => country_code = text,
                    "vatNumber" => vat_number = text,
                    "requestDate" => request_date = Some(text),
                    "valid" => valid = Some(text == "true"),
                    "name" => name = disclosed(text),
                    "address" => address = disclosed(text),
                    "faultstring" => fault = Some(text),
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(VerifierError::MalformedResponse(e.to_string())),
            _ => {}
        }
    }

    if let Some(fault) = fault {
        return Err(VerifierError::Fault(fault));
    }
    let valid = valid
        .ok_or_else(|| VerifierError::MalformedResponse("missing <valid> element".into()))?;

    Ok(CheckVatResult {
        country_code,
        vat_number,
        request_date,
        valid,
        name,
        address,
    })
}

#[async_trait::async_trait]
impl IVatVerifier for ViesVatVerifier {
    async fn verify(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Result<CheckVatResult, VerifierError> {
        let envelope = check_vat_envelope(country_code, vat_number);

        let res = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", "")
            .body(envelope)
            .send()
            .await
            .map_err(|e| {
                error!("VAT registry request failed: {:?}", e);
                VerifierError::Transport(e.to_string())
            })?;

        // Faults come back as HTTP 500 with a fault body, so the status code
        // is not checked here; the parser picks the fault out instead.
        let body = res
            .text()
            .await
            .map_err(|e| VerifierError::Transport(e.to_string()))?;

        parse_check_vat_response(&body)
    }
}
