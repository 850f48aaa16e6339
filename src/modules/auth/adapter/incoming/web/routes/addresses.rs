use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    AddressError, AddressFields, CreateAddressCommand, UpdateAddressCommand,
};
use crate::auth::application::ports::outgoing::AddressRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, patch, post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddressRequest {
    #[schema(example = "home")]
    pub address_type: Option<String>,
    #[schema(example = "Home")]
    pub name: Option<String>,
    #[schema(example = "1 Market Street")]
    pub address: Option<String>,
    #[schema(example = "Springfield")]
    pub city: Option<String>,
    #[schema(example = "IL")]
    pub state: Option<String>,
    #[schema(example = "62701")]
    pub postal_code: Option<String>,
    pub is_default: Option<bool>,
    /// `[lat, lng]`; `null` clears stored coordinates.
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<Vec<f64>>, example = json!([39.78, -89.65]))]
    pub coordinates: Option<Option<Vec<f64>>>,
}

/// Distinguishes an explicit `null` from an absent field.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<AddressRequest> for AddressFields {
    fn from(req: AddressRequest) -> Self {
        Self {
            address_type: req.address_type,
            name: req.name,
            address: req.address,
            city: req.city,
            state: req.state,
            postal_code: req.postal_code,
            is_default: req.is_default,
            coordinates: req.coordinates,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddressResponse {
    pub id: Uuid,
    pub address_type: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub is_default: bool,
    #[schema(example = json!([39.78, -89.65]))]
    pub coordinates: Option<[f64; 2]>,
}

impl From<AddressRecord> for AddressResponse {
    fn from(record: AddressRecord) -> Self {
        Self {
            id: record.id,
            address_type: record.address_type,
            name: record.name,
            address: record.address,
            city: record.city,
            state: record.state,
            postal_code: record.postal_code,
            is_default: record.is_default,
            coordinates: record.coordinates.map(|c| c.to_pair()),
        }
    }
}

fn address_error_response(e: AddressError) -> HttpResponse {
    match e {
        AddressError::NotFound => ApiResponse::not_found("ADDRESS_NOT_FOUND", "Address not found"),
        AddressError::RepositoryError(ref msg) => {
            error!(error = %msg, "Address repository failure");
            ApiResponse::internal_error()
        }
    }
}

/// List the caller's addresses, default first
#[utoipa::path(
    get,
    path = "/api/auth/account/addresses",
    tag = "addresses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Addresses", body = inline(SuccessResponse<Vec<AddressResponse>>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    )
)]
#[get("/api/auth/account/addresses")]
pub async fn list_addresses_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.list_addresses.execute(user.user_id).await {
        Ok(records) => ApiResponse::success(
            records
                .into_iter()
                .map(AddressResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => address_error_response(e),
    }
}

/// Add an address
#[utoipa::path(
    post,
    path = "/api/auth/account/addresses",
    tag = "addresses",
    request_body = AddressRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Address created", body = inline(SuccessResponse<AddressResponse>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
    )
)]
#[post("/api/auth/account/addresses")]
pub async fn create_address_handler(
    user: AuthenticatedUser,
    req: web::Json<AddressRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateAddressCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .account
        .create_address
        .execute(user.user_id, command)
        .await
    {
        Ok(record) => ApiResponse::created(AddressResponse::from(record)),
        Err(e) => address_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/auth/account/addresses/{id}",
    tag = "addresses",
    params(("id" = Uuid, Path, description = "Address id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Address", body = inline(SuccessResponse<AddressResponse>)),
        (status = 404, description = "Not found or not owned", body = ErrorResponse),
    )
)]
#[get("/api/auth/account/addresses/{id}")]
pub async fn get_address_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .account
        .get_address
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(record) => ApiResponse::success(AddressResponse::from(record)),
        Err(e) => address_error_response(e),
    }
}

async fn update_address(
    user: AuthenticatedUser,
    id: Uuid,
    command: UpdateAddressCommand,
    data: &AppState,
) -> HttpResponse {
    match data
        .account
        .update_address
        .execute(user.user_id, id, command)
        .await
    {
        Ok(record) => {
            info!(user_id = %user.user_id, address_id = %id, "Address updated");
            ApiResponse::success(AddressResponse::from(record))
        }
        Err(e) => address_error_response(e),
    }
}

/// Replace an address
#[utoipa::path(
    put,
    path = "/api/auth/account/addresses/{id}",
    tag = "addresses",
    params(("id" = Uuid, Path, description = "Address id")),
    request_body = AddressRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Address", body = inline(SuccessResponse<AddressResponse>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Not found or not owned", body = ErrorResponse),
    )
)]
#[put("/api/auth/account/addresses/{id}")]
pub async fn replace_address_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddressRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match UpdateAddressCommand::replace(req.into_inner().into()) {
        Ok(command) => update_address(user, path.into_inner(), command, &data).await,
        Err(e) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    }
}

/// Change some fields of an address
#[utoipa::path(
    patch,
    path = "/api/auth/account/addresses/{id}",
    tag = "addresses",
    params(("id" = Uuid, Path, description = "Address id")),
    request_body = AddressRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Address", body = inline(SuccessResponse<AddressResponse>)),
        (status = 404, description = "Not found or not owned", body = ErrorResponse),
    )
)]
#[patch("/api/auth/account/addresses/{id}")]
pub async fn patch_address_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddressRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match UpdateAddressCommand::patch(req.into_inner().into()) {
        Ok(command) => update_address(user, path.into_inner(), command, &data).await,
        Err(e) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/auth/account/addresses/{id}",
    tag = "addresses",
    params(("id" = Uuid, Path, description = "Address id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 404, description = "Not found or not owned", body = ErrorResponse),
    )
)]
#[delete("/api/auth/account/addresses/{id}")]
pub async fn delete_address_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .account
        .delete_address
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => address_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Coordinates, UserId};
    use crate::auth::application::ports::incoming::use_cases::{
        CreateAddressUseCase, DeleteAddressUseCase, GetAddressUseCase, ListAddressesUseCase,
        UpdateAddressUseCase,
    };
    use crate::auth::application::ports::outgoing::AddressChanges;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, StubTokenProvider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Knows exactly one address, owned by `owner`.
    #[derive(Clone)]
    struct MockAddressBook {
        owner: UserId,
        record: AddressRecord,
        last_changes: Arc<Mutex<Option<AddressChanges>>>,
    }

    impl MockAddressBook {
        fn new(owner: Uuid) -> Self {
            let owner = UserId::from(owner);
            Self {
                owner,
                record: AddressRecord {
                    id: Uuid::new_v4(),
                    user_id: owner,
                    address_type: "home".to_string(),
                    name: "Home".to_string(),
                    address: "1 Market Street".to_string(),
                    city: "Springfield".to_string(),
                    state: "IL".to_string(),
                    postal_code: "62701".to_string(),
                    is_default: true,
                    coordinates: Some(Coordinates::new(39.78, -89.65).unwrap()),
                },
                last_changes: Arc::new(Mutex::new(None)),
            }
        }

        fn lookup(&self, owner: UserId, id: Uuid) -> Result<AddressRecord, AddressError> {
            if owner == self.owner && id == self.record.id {
                Ok(self.record.clone())
            } else {
                Err(AddressError::NotFound)
            }
        }
    }

    #[async_trait]
    impl ListAddressesUseCase for MockAddressBook {
        async fn execute(&self, owner: UserId) -> Result<Vec<AddressRecord>, AddressError> {
            Ok(if owner == self.owner {
                vec![self.record.clone()]
            } else {
                vec![]
            })
        }
    }

    #[async_trait]
    impl GetAddressUseCase for MockAddressBook {
        async fn execute(&self, owner: UserId, id: Uuid) -> Result<AddressRecord, AddressError> {
            self.lookup(owner, id)
        }
    }

    #[async_trait]
    impl CreateAddressUseCase for MockAddressBook {
        async fn execute(
            &self,
            owner: UserId,
            command: CreateAddressCommand,
        ) -> Result<AddressRecord, AddressError> {
            let data = command.into_data();
            Ok(AddressRecord {
                id: Uuid::new_v4(),
                user_id: owner,
                address_type: data.address_type,
                name: data.name,
                address: data.address,
                city: data.city,
                state: data.state,
                postal_code: data.postal_code,
                is_default: data.is_default,
                coordinates: data.coordinates,
            })
        }
    }

    #[async_trait]
    impl UpdateAddressUseCase for MockAddressBook {
        async fn execute(
            &self,
            owner: UserId,
            id: Uuid,
            command: UpdateAddressCommand,
        ) -> Result<AddressRecord, AddressError> {
            let record = self.lookup(owner, id)?;
            *self.last_changes.lock().unwrap() = Some(command.into_changes());
            Ok(record)
        }
    }

    #[async_trait]
    impl DeleteAddressUseCase for MockAddressBook {
        async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), AddressError> {
            self.lookup(owner, id).map(|_| ())
        }
    }

    macro_rules! address_app {
        ($book:expr, $caller:expr) => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().with_addresses($book).build())
                    .app_data(StubTokenProvider::customer($caller).into_data())
                    .service(list_addresses_handler)
                    .service(create_address_handler)
                    .service(get_address_handler)
                    .service(replace_address_handler)
                    .service(patch_address_handler)
                    .service(delete_address_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_defaults_type_and_returns_pair() {
        let owner = Uuid::new_v4();
        let app = address_app!(MockAddressBook::new(owner), owner);

        let req = test::TestRequest::post()
            .uri("/api/auth/account/addresses")
            .insert_header(bearer())
            .set_json(serde_json::json!({
                "name": "Office",
                "address": "9 Side Road",
                "city": "Springfield",
                "state": "IL",
                "postal_code": "62702",
                "coordinates": [39.8, -89.6]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["address_type"], "home");
        assert_eq!(body["data"]["is_default"], false);
        assert_eq!(
            body["data"]["coordinates"],
            serde_json::json!([39.8, -89.6])
        );
    }

    #[actix_web::test]
    async fn create_rejects_bad_coordinates() {
        let owner = Uuid::new_v4();
        let app = address_app!(MockAddressBook::new(owner), owner);

        let req = test::TestRequest::post()
            .uri("/api/auth/account/addresses")
            .insert_header(bearer())
            .set_json(serde_json::json!({
                "name": "Office",
                "address": "9 Side Road",
                "city": "Springfield",
                "state": "IL",
                "postal_code": "62702",
                "coordinates": [95.0, 10.0]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn other_users_address_is_not_found() {
        let book = MockAddressBook::new(Uuid::new_v4());
        let id = book.record.id;
        let app = address_app!(book, Uuid::new_v4());

        let req = test::TestRequest::get()
            .uri(&format!("/api/auth/account/addresses/{id}"))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ADDRESS_NOT_FOUND");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/auth/account/addresses/{id}"))
            .insert_header(bearer())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }

    #[actix_web::test]
    async fn patch_with_null_coordinates_clears_them() {
        let owner = Uuid::new_v4();
        let book = MockAddressBook::new(owner);
        let id = book.record.id;
        let app = address_app!(book.clone(), owner);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/auth/account/addresses/{id}"))
            .insert_header(bearer())
            .set_json(serde_json::json!({ "coordinates": null }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let changes = book.last_changes.lock().unwrap().clone().unwrap();
        assert_eq!(changes.coordinates, Some(None));
        assert_eq!(changes.name, None);
    }

    #[actix_web::test]
    async fn put_requires_every_text_field() {
        let owner = Uuid::new_v4();
        let book = MockAddressBook::new(owner);
        let id = book.record.id;
        let app = address_app!(book, owner);

        let req = test::TestRequest::put()
            .uri(&format!("/api/auth/account/addresses/{id}"))
            .insert_header(bearer())
            .set_json(serde_json::json!({ "name": "Only a name" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }

    #[actix_web::test]
    async fn list_shows_only_own_addresses() {
        let owner = Uuid::new_v4();
        let app = address_app!(MockAddressBook::new(owner), owner);

        let req = test::TestRequest::get()
            .uri("/api/auth/account/addresses")
            .insert_header(bearer())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["is_default"], true);
    }
}
