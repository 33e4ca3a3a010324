//! # Science 터미널 클라이언트 진입점
//!
//! 이 파일은 Science 클라이언트의 **시작점(entry point)**입니다.
//! Rust 프로그램은 항상 `main()` 함수에서 실행이 시작됩니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩 (서버 URL, 세션 파일 경로)
//! 4. CLI 인자 파싱 (서브커맨드 = 화면)
//! 5. 세션 가드 통과 후 해당 뷰 실행

// ── 모듈 선언 ──
// `mod` 키워드는 다른 파일을 모듈로 가져옵니다.
// 예: `mod config;`는 같은 디렉토리의 `config.rs` 또는 `config/mod.rs`를 가져옵니다.
// Rust에서는 파일 시스템 구조가 곧 모듈 구조입니다.
mod api;
mod cli;
mod config;
mod error;
mod models;
mod services;
mod session;
mod views;

// ── 외부 크레이트 및 모듈에서 필요한 항목 가져오기 ──
// `use` 키워드는 다른 모듈의 항목을 현재 스코프로 가져옵니다.
use anyhow::Context; // .context(): 에러에 사람이 읽을 설명을 덧붙이는 확장 메서드
use clap::Parser; // CLI 파싱 derive 매크로의 트레이트
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티

use api::{Client, JournalApi, UserApi};
use cli::{Cli, Command};
use config::Config;
use session::SessionStore;
use views::{SubmitGuard, ViewContext};

// #[tokio::main]: 비동기 런타임을 시작하는 **어트리뷰트 매크로**
// Rust의 main() 함수는 기본적으로 동기(sync)이므로,
// async/await를 사용하려면 비동기 런타임(Tokio)이 필요합니다.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일에서 환경변수를 읽어옵니다. (예: SCIENCE_SERVER_URL)
    // .ok()는 Result를 Option으로 변환하여, .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // registry(): 로그 수집기를 만들고
    // .with(): 필터와 포맷터를 레이어처럼 쌓아올립니다 (데코레이터 패턴)
    tracing_subscriber::registry()
        .with(
            // EnvFilter: RUST_LOG 환경변수로 로그 레벨을 제어합니다.
            // 환경변수가 없으면 기본값으로 science를 debug, reqwest를 info 레벨로 설정
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "science=debug,reqwest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer()) // 로그를 터미널에 출력하는 포맷터 레이어
        .init(); // 전역 로거로 등록

    // ── 3단계: 설정과 세션 저장소 준비 ──
    // `?` 연산자: Result가 Err이면 즉시 함수에서 반환(에러 전파).
    let config = Config::from_env().context("SCIENCE_SERVER_URL must be set")?;
    let store = SessionStore::new(&config.session_path);

    // ── 4단계: CLI 파싱과 디스패치 ──
    let cli = Cli::parse();
    run(cli.command, &config, &store).await
}

/// 서브커맨드 하나를 실행합니다.
///
/// 로그인/회원가입만 토큰 없이 동작하고, 나머지는 전부 세션 가드를
/// 통과해야 합니다 — 저장된 세션이 없으면 뷰를 시작하지 않고 즉시
/// 에러로 끝납니다 (로그인 화면으로의 리다이렉트에 해당).
async fn run(command: Command, config: &Config, store: &SessionStore) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            let client = Client::new(&config.server_url);
            let session = views::auth::login(&client, store, &email, &password).await?;
            tracing::debug!(path = %store.path().display(), "session stored");
            println!("Signed in as {} <{}>", session.name, session.email);
            return Ok(());
        }
        Command::SignUp {
            name,
            email,
            password,
            institution,
            orcid,
        } => {
            let client = Client::new(&config.server_url);
            let form = views::auth::SignUpForm {
                name,
                email,
                password,
                institution,
                orcid,
            };
            let session = views::auth::sign_up(&client, store, &form).await?;
            println!("Welcome, {}! You are signed in.", session.name);
            return Ok(());
        }
        Command::Logout => {
            // 세션이 이미 없어도 로그아웃은 성공으로 끝납니다.
            if let Some(session) = store.load()? {
                let ctx = ViewContext::new(session);
                views::auth::log_out(&ctx, store)?;
            }
            println!("Signed out.");
            return Ok(());
        }
        command => {
            // ── 세션 가드 ──
            // require()는 저장된 세션이 없으면 NotAuthenticated 에러를 돌려줍니다.
            let session = store.require()?;
            let client = Client::with_token(&config.server_url, &session.token);
            let ctx = ViewContext::new(session);
            run_protected(command, &ctx, &client).await?;
        }
    }
    Ok(())
}

/// 세션 가드를 통과한 뒤의 화면들
async fn run_protected(command: Command, ctx: &ViewContext, client: &Client) -> anyhow::Result<()> {
    match command {
        Command::Home => {
            let view = views::home::load(ctx, client).await;
            print!("{}", view.render());
        }
        Command::Journal { id } => {
            let view = views::journal::load(ctx, client, id).await;
            print!("{}", view.render());
        }
        Command::Issue { id } => {
            let view = views::issue::load(ctx, client, id).await;
            print!("{}", view.render());
        }
        Command::Paper { id } => {
            let view = views::paper::load(ctx, client, id).await;
            print!("{}", view.render());
        }
        Command::User { id } => {
            let view = views::profile::load(ctx, client, id).await;
            print!("{}", view.render());
        }
        Command::NewJournal { name, issn } => {
            let mut guard = SubmitGuard::new();
            let (journal, assign_error) =
                views::forms::create_journal(ctx, client, &mut guard, &name, &issn).await?;
            println!("Created journal [{}] {}", journal.id, journal.name);
            if let Some(err) = assign_error {
                tracing::warn!(error = %err, "could not assign you as editor");
                println!("Created, but you could not be assigned as editor: {err}");
            }
        }
        Command::NewIssue {
            journal,
            volume,
            number,
        } => {
            let mut guard = SubmitGuard::new();
            views::forms::create_issue(client, &mut guard, journal, volume, number).await?;
            println!("Created Volume {volume}, Issue {number}.");
        }
        Command::NewPaper {
            name: Some(name),
            url: Some(url),
            journal: Some(journal),
            coauthors,
        } => {
            let mut guard = SubmitGuard::new();
            views::forms::create_paper(ctx, client, &mut guard, &name, &url, journal, &coauthors)
                .await?;
            println!("Submitted \"{name}\".");
        }
        Command::NewPaper { coauthors, .. } => {
            // 인자가 빠졌으면 폼이 미리 로드하는 선택지를 보여줍니다.
            let choices = views::forms::load_paper_choices(ctx, client).await;
            println!("Journals:");
            if let Some(journals) = choices.journals.ready() {
                for journal in journals {
                    println!("  [{}] {}", journal.id, journal.name);
                }
            }
            println!("Available coauthors:");
            if let Some(researchers) = choices.researchers.ready() {
                for candidate in
                    views::forms::available_coauthors(researchers, &coauthors, ctx.session.user_id)
                {
                    println!("  [{}] {}", candidate.id, candidate.name);
                }
            }
        }
        Command::AddEditor { journal, user } => {
            let current = client.editors(journal).await?;
            match user {
                Some(user) => {
                    let mut guard = SubmitGuard::new();
                    let editors =
                        views::journal::add_editor(client, &mut guard, journal, user, &current)
                            .await?;
                    println!("Journal now has {} editor(s).", editors.len());
                }
                None => {
                    let all = client.users(views::lookup::DIRECTORY_LIMIT).await?;
                    for candidate in views::journal::available_users(&all, &current) {
                        println!("[{}] {}", candidate.id, candidate.name);
                    }
                }
            }
        }
        Command::AddReviewer { journal, user } => {
            let current = client.reviewers(journal).await?;
            match user {
                Some(user) => {
                    let mut guard = SubmitGuard::new();
                    let reviewers =
                        views::journal::add_reviewer(client, &mut guard, journal, user, &current)
                            .await?;
                    println!("Journal now has {} reviewer(s).", reviewers.len());
                }
                None => {
                    let all = client.users(views::lookup::DIRECTORY_LIMIT).await?;
                    for candidate in views::journal::available_users(&all, &current) {
                        println!("[{}] {}", candidate.id, candidate.name);
                    }
                }
            }
        }
        Command::RequestReview {
            paper,
            first_reviewer,
            second_reviewer,
            due,
        } => {
            let mut guard = SubmitGuard::new();
            let req = models::ReviewRequest {
                paper_id: paper,
                first_reviewer_id: first_reviewer,
                second_reviewer_id: second_reviewer,
                due_date: due,
            };
            views::review::request(client, &mut guard, &req).await?;
            println!("Review round requested for paper {paper}.");
        }
        Command::SubmitReview {
            id,
            recommendation: Some(recommendation),
            comments: Some(comments),
            score: Some(score),
        } => {
            let mut guard = SubmitGuard::new();
            let submission = models::ReviewSubmission {
                recommendation,
                comments,
                overall_score: score,
            };
            views::review::submit(client, &mut guard, id, &submission).await?;
            // 제출이 끝나면 홈으로 돌아갑니다.
            let view = views::home::load(ctx, client).await;
            println!("Review submitted.\n");
            print!("{}", view.render());
        }
        Command::SubmitReview { id, .. } => {
            // 플래그가 빠졌으면 평가할 리뷰의 맥락(리뷰 → 논문 → 저널)을 보여줍니다.
            let view = views::review::load_submit(ctx, client, id).await;
            print!("{}", view.render());
        }
        Command::Reviews => {
            let view = views::review::load_lists(ctx, client).await;
            print!("{}", view.render());
        }
        // 인증이 필요 없는 커맨드는 run()에서 이미 처리되었습니다.
        Command::Login { .. } | Command::SignUp { .. } | Command::Logout => unreachable!(),
    }
    Ok(())
}
