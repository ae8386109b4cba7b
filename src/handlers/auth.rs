use axum::{
    extract::State,
    response::Json,
};
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use mongodb::bson::{doc, DateTime as BsonDateTime};
use mongodb::Collection;

use crate::errors::{AppError, Result};
use crate::models::user::{
    AuthResponse, Claims, CreateUser, LoginUser, User, UserResponse,
};
use crate::state::AppState;

const USERS: &str = "users";
const TOKEN_TTL_SECS: i64 = 86400; // 24 hours

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> Result<Json<AuthResponse>> {
    let collection: Collection<User> = state.db.collection(USERS);

    if payload.username.trim().is_empty() || payload.password.len() < 6 {
        return Err(AppError::ValidationError(
            "username and a password of at least 6 characters are required".to_string(),
        ));
    }

    let filter = doc! { "username": &payload.username };
    if collection.find_one(filter).await?.is_some() {
        return Err(AppError::InvalidUserData);
    }

    let password_hash = hash(&payload.password, DEFAULT_COST)
        .map_err(|_e| AppError::InvalidUserData)?;

    let now = BsonDateTime::now();
    let user = User {
        _id: None,
        username: payload.username.clone(),
        password_hash,
        created_at: now,
        updated_at: now,
    };

    let insert_result = collection.insert_one(&user).await?;
    let inserted_id = insert_result
        .inserted_id
        .as_object_id()
        .ok_or(AppError::InvalidUserData)?;

    let token = issue_token(&inserted_id.to_hex(), &payload.username, &state.jwt_secret)?;

    Ok(Json(AuthResponse {
        user: UserResponse {
            id: inserted_id.to_hex(),
            username: payload.username,
        },
        token,
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginUser>,
) -> Result<Json<AuthResponse>> {
    let collection: Collection<User> = state.db.collection(USERS);

    let filter = doc! { "username": &payload.username };
    let user = collection
        .find_one(filter)
        .await?
        .ok_or(AppError::AuthError)?;

    let valid = verify(&payload.password, &user.password_hash)
        .map_err(|_e| AppError::AuthError)?;
    if !valid {
        return Err(AppError::AuthError);
    }

    let user_id = user._id.map(|id| id.to_hex()).unwrap_or_default();
    let token = issue_token(&user_id, &user.username, &state.jwt_secret)?;

    Ok(Json(AuthResponse {
        user: UserResponse {
            id: user_id,
            username: user.username,
        },
        token,
    }))
}

fn issue_token(sub: &str, username: &str, secret: &str) -> Result<String> {
    let claims = Claims {
        sub: sub.to_string(),
        username: username.to_string(),
        exp: (Utc::now().timestamp() + TOKEN_TTL_SECS) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|_| AppError::AuthError)
}
