use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// How the fixture origin answers for one document (or the chat upstream).
#[derive(Clone)]
pub enum Behavior {
    Json(Value),
    /// A body that is not JSON, to exercise parse-failure handling.
    Garbage,
    Status(u16),
}

#[derive(Default)]
struct OriginState {
    documents: Mutex<HashMap<String, Behavior>>,
}

/// Stands in for the static-JSON hosting and the chat upstream: a tiny
/// axum server the app under test fetches from.
pub struct FixtureOrigin {
    pub addr: SocketAddr,
    state: Arc<OriginState>,
}

impl FixtureOrigin {
    pub async fn start() -> Self {
        let state = Arc::new(OriginState::default());

        let router = Router::new()
            .route("/chat/completions", post(serve_chat))
            .route("/:document", get(serve_document))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fixture origin");
        let addr = listener.local_addr().expect("fixture origin addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("fixture origin");
        });

        let origin = Self { addr, state };
        origin.install_defaults();
        origin
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn chat_url(&self) -> String {
        format!("http://{}/chat/completions", self.addr)
    }

    pub fn set(&self, document: &str, behavior: Behavior) {
        self.state
            .documents
            .lock()
            .unwrap()
            .insert(document.to_string(), behavior);
    }

    pub fn set_json(&self, document: &str, value: Value) {
        self.set(document, Behavior::Json(value));
    }

    /// Healthy defaults: a few posts (one horoscope, one hostile title),
    /// two news items, fifteen travel spots, four categories, and a chat
    /// upstream that answers.
    fn install_defaults(&self) {
        self.set_json("posts.json", default_posts());
        self.set_json("korea_now.json", default_policy_news());
        self.set_json("go_now.json", default_travel(15));
        self.set_json("categories.json", default_categories());
        self.set_json("chat/completions", default_completion());
    }
}

async fn serve_document(
    State(state): State<Arc<OriginState>>,
    Path(document): Path<String>,
) -> Response {
    respond(&state, &document)
}

async fn serve_chat(State(state): State<Arc<OriginState>>) -> Response {
    respond(&state, "chat/completions")
}

fn respond(state: &OriginState, key: &str) -> Response {
    match state.documents.lock().unwrap().get(key) {
        Some(Behavior::Json(value)) => Json(value.clone()).into_response(),
        Some(Behavior::Garbage) => "{ this is not json".into_response(),
        Some(Behavior::Status(code)) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({"error": "fixture failure"}))).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn default_posts() -> Value {
    json!({
        "posts": [
            {
                "id": 1,
                "title": "혈압을 낮추는 7가지 생활 습관",
                "category": "건강상식",
                "author": "장병희",
                "created_at": "2026-01-10",
                "excerpt": "소금 섭취를 줄이고 매일 30분씩 걷기만 해도 혈압은 달라집니다.",
                "featured_image": "https://img.example/bp.jpg",
                "content": "<p>혈압 관리의 기본은 식단입니다.</p>",
                "views": 3
            },
            {
                "id": 2,
                "title": "오늘의 운세 - 말띠",
                "category": "오늘의 운세",
                "created_at": "2026-01-11",
                "content": "<p>2025년 10월 31일 말띠 운세입니다. 귀인이 동쪽에서 옵니다.</p>"
            },
            {
                "id": 3,
                "title": "무릎 관절을 지키는 스트레칭",
                "category": "건강상식",
                "created_at": "2026-01-12",
                "content": "<p>의자에 앉아 다리를 천천히 펴는 동작부터 시작하세요.</p>"
            },
            {
                "id": 4,
                "title": "<script>alert(1)</script>",
                "category": "건강상식",
                "content": "제목 살균 처리 확인용 게시글"
            }
        ]
    })
}

pub fn default_policy_news() -> Value {
    json!({
        "items": [
            {
                "title": "기초연금 인상 확정",
                "summary": "<p>내년부터 기초연금 지급액이 인상됩니다.</p>",
                "pub_date": "2026-02-01 09:00:00",
                "thumbnail_url": "http://img.korea.kr/pension.jpg",
                "link": "https://www.korea.kr/news/pension",
                "author": "보건복지부"
            },
            {
                "title": "독감 무료 접종 시작",
                "summary": "<p>어르신 대상 무료 접종이 시작됩니다.</p>",
                "link": "https://www.korea.kr/news/flu"
            }
        ]
    })
}

pub fn default_travel(count: usize) -> Value {
    let regions = ["서울", "부산", "강원"];
    let items: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "title": format!("여행지 {}", i),
                "addr1": format!("{} 어딘가길 {}", regions[i % regions.len()], i),
                "tel": "02-000-0000",
                "firstimage": format!("http://tour.example/{}.jpg", i),
                "detail_link": format!("https://korean.visitkorea.or.kr/detail/{}", i)
            })
        })
        .collect();
    json!({ "items": items })
}

pub fn default_categories() -> Value {
    json!([
        {"name": "건강상식", "slug": "health", "icon": "fa-heartbeat", "count": 31},
        {"name": "오늘의 운세", "slug": "fortune", "icon": "fa-star", "count": 24},
        {"name": "대한민국은, 지금", "slug": "korea-now", "icon": "fa-landmark", "count": 40},
        {"name": "가보자고", "slug": "go-now", "icon": "fa-map-marked-alt", "count": 120}
    ])
}

pub fn default_completion() -> Value {
    json!({
        "choices": [
            {"message": {"role": "assistant", "content": "할머니~ 오늘도 보고 싶었어요! 😊"}}
        ],
        "usage": {"prompt_tokens": 42, "completion_tokens": 12, "total_tokens": 54}
    })
}
