//! Elicitation transport over an rmcp server peer.
//!
//! The requested schema is mapped field by field onto rmcp's typed
//! `ElicitationSchema`, and replies are read back as raw JSON so that the
//! mediator sees the `action` string the client actually sent.

use std::collections::BTreeMap;

use async_trait::async_trait;
use rmcp::model::{
    BooleanSchema, ClientResult, CreateElicitationRequest, CreateElicitationRequestParams,
    CustomResult, ElicitationSchema, EnumSchema, LegacyEnumSchema, NumberSchema, PrimitiveSchema,
    ServerRequest, StringSchema, StringTypeConst,
};
use rmcp::{Peer, RoleServer};
use serde_json::Value;

use crate::elicitation::field::ANSWER_PROPERTY;
use crate::elicitation::{
    ElicitationReply, ElicitationRequest, ElicitationTransport, FieldSpec, StringFormat,
};
use crate::ElicitError;

#[async_trait]
impl ElicitationTransport for Peer<RoleServer> {
    async fn send(&self, request: ElicitationRequest) -> Result<ElicitationReply, ElicitError> {
        let params = request_params(&request);
        let request = ServerRequest::CreateElicitationRequest(CreateElicitationRequest::new(params));

        let raw = match self.send_request(request).await? {
            ClientResult::CreateElicitationResult(result) => {
                serde_json::to_value(result).map_err(malformed_reply)?
            }
            // Replies rmcp cannot type (e.g. an unknown action) arrive untouched.
            ClientResult::CustomResult(CustomResult(value)) => value,
            _ => {
                tracing::warn!("Client answered elicitation with an unrelated result type");
                return Err(ElicitError::ProtocolViolation(
                    "unexpected reply to elicitation request".into(),
                ));
            }
        };

        reply_from_value(raw)
    }
}

/// rmcp parameters carrying the same `message` and `requestedSchema`.
pub(crate) fn request_params(request: &ElicitationRequest) -> CreateElicitationRequestParams {
    let properties = BTreeMap::from([(
        ANSWER_PROPERTY.to_string(),
        primitive_schema(request.requested_schema.answer()),
    )]);

    CreateElicitationRequestParams {
        meta: None,
        message: request.message.clone(),
        requested_schema: ElicitationSchema::new(properties),
    }
}

fn primitive_schema(field: &FieldSpec) -> PrimitiveSchema {
    match field {
        FieldSpec::String(f) => match &f.enum_values {
            Some(values) => PrimitiveSchema::Enum(EnumSchema::Legacy(LegacyEnumSchema {
                type_: StringTypeConst,
                title: Some(f.title.clone().into()),
                description: f.description.clone().map(Into::into),
                enum_: values.clone(),
                enum_names: f.enum_names.clone(),
            })),
            None => PrimitiveSchema::String(StringSchema {
                title: Some(f.title.clone().into()),
                description: f.description.clone().map(Into::into),
                format: f.format.map(string_format),
                ..StringSchema::default()
            }),
        },
        FieldSpec::Boolean(f) => PrimitiveSchema::Boolean(BooleanSchema {
            title: Some(f.title.clone().into()),
            description: f.description.clone().map(Into::into),
            ..BooleanSchema::default()
        }),
        FieldSpec::Number(f) => PrimitiveSchema::Number(NumberSchema {
            title: Some(f.title.clone().into()),
            description: f.description.clone().map(Into::into),
            minimum: f.minimum,
            maximum: f.maximum,
            ..NumberSchema::default()
        }),
    }
}

fn string_format(format: StringFormat) -> rmcp::model::StringFormat {
    match format {
        StringFormat::Email => rmcp::model::StringFormat::Email,
        StringFormat::Uri => rmcp::model::StringFormat::Uri,
        StringFormat::Date => rmcp::model::StringFormat::Date,
        StringFormat::DateTime => rmcp::model::StringFormat::DateTime,
    }
}

fn reply_from_value(raw: Value) -> Result<ElicitationReply, ElicitError> {
    serde_json::from_value(raw).map_err(malformed_reply)
}

fn malformed_reply(err: serde_json::Error) -> ElicitError {
    ElicitError::ProtocolViolation(format!("malformed elicitation reply: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elicitation::DateFormat;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn every_field_kind() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("Name", Some("Your full name".into())).unwrap(),
            FieldSpec::choice(
                "Pick",
                None,
                vec!["a".into(), "b".into()],
                Some(vec!["Alpha".into(), "Beta".into()]),
            )
            .unwrap(),
            FieldSpec::choice("Fruit", None, vec!["apple".into()], None).unwrap(),
            FieldSpec::boolean("Proceed?", Some("Deploys to production".into())).unwrap(),
            FieldSpec::number("Replicas", None, Some(1.0), Some(10.0)).unwrap(),
            FieldSpec::number("Anything", None, None, None).unwrap(),
            FieldSpec::date_time("Birthday", None, DateFormat::Date).unwrap(),
            FieldSpec::date_time("Meeting", None, DateFormat::DateTime).unwrap(),
            FieldSpec::email("Contact", None).unwrap(),
            FieldSpec::uri("Homepage", None).unwrap(),
        ]
    }

    #[test]
    fn test_request_params_keep_the_wire_shape() {
        for field in every_field_kind() {
            let request = ElicitationRequest::new("question", field);
            let params = request_params(&request);

            assert_eq!(
                serde_json::to_value(&params).unwrap(),
                serde_json::to_value(&request).unwrap()
            );
        }
    }

    #[test]
    fn test_choice_keeps_option_labels() {
        let field = FieldSpec::choice(
            "Pick",
            None,
            vec!["a".into(), "b".into()],
            Some(vec!["Alpha".into(), "Beta".into()]),
        )
        .unwrap();
        let params = request_params(&ElicitationRequest::new("Pick", field));

        assert_eq!(
            serde_json::to_value(&params.requested_schema).unwrap()["properties"]["answer"],
            json!({
                "type": "string",
                "title": "Pick",
                "enum": ["a", "b"],
                "enumNames": ["Alpha", "Beta"]
            })
        );
    }

    #[test]
    fn test_unknown_action_survives_decoding() {
        let reply = reply_from_value(json!({ "action": "surprise" })).unwrap();
        assert_eq!(reply.action, "surprise");
        assert_eq!(reply.content, None);
    }

    #[test]
    fn test_reply_without_action_is_protocol_violation() {
        let err = reply_from_value(json!({ "content": {} })).unwrap_err();
        assert!(matches!(err, ElicitError::ProtocolViolation(_)));
    }
}
