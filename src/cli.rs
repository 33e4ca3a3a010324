//! # CLI 정의 모듈
//!
//! 서브커맨드 하나가 화면 하나에 대응합니다. 파싱은 clap의 derive
//! 매크로가 담당하고, 실행은 `main.rs`의 디스패치가 담당합니다.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "science")]
#[command(about = "Terminal client for the Science publishing workflow")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and store the session locally
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an author account and sign in
    SignUp {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        institution: String,
        #[arg(long)]
        orcid: String,
    },
    /// Drop the stored session
    Logout,
    /// Your journals, papers and assigned reviews
    Home,
    /// Journal detail with issues, editors and reviewers
    Journal {
        id: i64,
    },
    /// Issue detail with its papers
    Issue {
        id: i64,
    },
    /// Paper detail with reviews and submitted evaluations
    Paper {
        id: i64,
    },
    /// Researcher profile
    User {
        id: i64,
    },
    /// Create a journal (you become its editor)
    NewJournal {
        #[arg(long)]
        name: String,
        #[arg(long)]
        issn: String,
    },
    /// Create an issue in a journal
    NewIssue {
        #[arg(long)]
        journal: i64,
        #[arg(long)]
        volume: i64,
        #[arg(long)]
        number: i64,
    },
    /// Submit a paper to a journal (run without arguments to list the choices)
    NewPaper {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        journal: Option<i64>,
        /// Coauthor researcher ids (you are always included)
        #[arg(long = "coauthor")]
        coauthors: Vec<i64>,
    },
    /// Assign an editor to a journal (omit --user to list who is available)
    AddEditor {
        #[arg(long)]
        journal: i64,
        #[arg(long)]
        user: Option<i64>,
    },
    /// Assign a reviewer to a journal (omit --user to list who is available)
    AddReviewer {
        #[arg(long)]
        journal: i64,
        #[arg(long)]
        user: Option<i64>,
    },
    /// Request a review round for a paper
    RequestReview {
        #[arg(long)]
        paper: i64,
        #[arg(long)]
        first_reviewer: i64,
        #[arg(long)]
        second_reviewer: i64,
        #[arg(long)]
        due: Option<String>,
    },
    /// Submit your evaluation for an assigned review
    /// (run without flags to see the review, paper and journal first)
    SubmitReview {
        id: i64,
        /// approve, minor_revision, major_revision or reject
        #[arg(long)]
        recommendation: Option<String>,
        #[arg(long)]
        comments: Option<String>,
        /// 1 to 5
        #[arg(long)]
        score: Option<i64>,
    },
    /// Review rounds you requested and reviews assigned to you
    Reviews,
}
