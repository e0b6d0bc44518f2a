use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bk_app::{OnboardingSequencer, SessionStore};
use bk_core::identity::{AuthResponse, LoginCredentials, RegisterCredentials, User};
use bk_core::onboarding::{
    AckResponse, BusinessDetails, BusinessGoals, ExpenseCategory, ExpenseFrequency,
    IncomeExpenseSetup, OnboardingData, OnboardingStep, StepPayload, WizardPhase,
};
use bk_core::ports::{
    ApiError, AuthApiPort, NavigatorPort, OnboardingApiPort, TokenKey, TokenStoreError,
    TokenStorePort,
};
use bk_core::routing::{Route, RouteGuard};
use bk_core::security::SecretString;
use bk_core::GuardDecision;

type CallLog = Arc<Mutex<Vec<String>>>;

mockall::mock! {
    pub AuthApi {}

    #[async_trait]
    impl AuthApiPort for AuthApi {
        async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError>;
        async fn register(&self, credentials: &RegisterCredentials) -> Result<AuthResponse, ApiError>;
        async fn logout(&self) -> Result<(), ApiError>;
        async fn me(&self) -> Result<User, ApiError>;
    }
}

struct MockOnboardingApi {
    log: CallLog,
    failures: Mutex<HashMap<&'static str, ApiError>>,
}

impl MockOnboardingApi {
    fn new(log: CallLog) -> Self {
        Self {
            log,
            failures: Mutex::new(HashMap::new()),
        }
    }

    fn fail_next(&self, call: &'static str, error: ApiError) {
        self.failures.lock().unwrap().insert(call, error);
    }

    fn record(&self, call: &'static str) -> Result<AckResponse, ApiError> {
        self.log.lock().unwrap().push(call.to_string());
        match self.failures.lock().unwrap().remove(call) {
            Some(err) => Err(err),
            None => Ok(AckResponse {
                success: true,
                message: "ok".to_string(),
            }),
        }
    }
}

#[async_trait]
impl OnboardingApiPort for MockOnboardingApi {
    async fn save_business_details(&self, _details: &BusinessDetails) -> Result<AckResponse, ApiError> {
        self.record("save_business_details")
    }

    async fn save_goals(&self, _goals: &BusinessGoals) -> Result<AckResponse, ApiError> {
        self.record("save_goals")
    }

    async fn save_income_expense(&self, _setup: &IncomeExpenseSetup) -> Result<AckResponse, ApiError> {
        self.record("save_income_expense")
    }

    async fn complete(&self) -> Result<AckResponse, ApiError> {
        self.record("complete")
    }

    async fn status(&self) -> Result<OnboardingData, ApiError> {
        self.log.lock().unwrap().push("status".to_string());
        Ok(OnboardingData {
            business_details: None,
            goals: None,
            income_expense: None,
            current_step: 1,
            completed: false,
        })
    }
}

struct MockNavigator {
    log: CallLog,
    current: Mutex<Option<Route>>,
}

impl NavigatorPort for MockNavigator {
    fn navigate(&self, route: Route) {
        self.log.lock().unwrap().push(format!("navigate:{}", route.path()));
        *self.current.lock().unwrap() = Some(route);
    }

    fn current(&self) -> Option<Route> {
        *self.current.lock().unwrap()
    }
}

#[derive(Default)]
struct MockTokenStore {
    values: Mutex<HashMap<TokenKey, SecretString>>,
}

impl TokenStorePort for MockTokenStore {
    fn get(&self, key: TokenKey) -> Result<Option<SecretString>, TokenStoreError> {
        Ok(self.values.lock().unwrap().get(&key).cloned())
    }

    fn set(&self, key: TokenKey, value: &SecretString) -> Result<(), TokenStoreError> {
        self.values.lock().unwrap().insert(key, value.clone());
        Ok(())
    }

    fn remove(&self, key: TokenKey) -> Result<(), TokenStoreError> {
        self.values.lock().unwrap().remove(&key);
        Ok(())
    }
}

struct Harness {
    sequencer: OnboardingSequencer,
    session: Arc<SessionStore>,
    onboarding_api: Arc<MockOnboardingApi>,
    navigator: Arc<MockNavigator>,
    log: CallLog,
}

fn new_user() -> User {
    User {
        id: "u-42".to_string(),
        email: "juma@example.com".to_string(),
        name: "Juma".to_string(),
        phone: Some("+255700000000".to_string()),
        onboarding_completed: false,
        created_at: "2024-03-01T08:00:00Z".to_string(),
    }
}

async fn build_harness() -> Harness {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));

    let mut auth_api = MockAuthApi::new();
    auth_api.expect_register().times(1).returning(|_| {
        Ok(AuthResponse {
            access_token: "acc".to_string(),
            refresh_token: "ref".to_string(),
            user: new_user(),
        })
    });

    let session = Arc::new(SessionStore::new(
        Arc::new(auth_api),
        Arc::new(MockTokenStore::default()),
    ));
    // No stored token, so initialization resolves without calling `me`.
    session.initialize().await;
    session
        .register(RegisterCredentials {
            email: "juma@example.com".to_string(),
            password: "hunter22".into(),
            name: "Juma".to_string(),
            phone: None,
        })
        .await
        .expect("register");

    let onboarding_api = Arc::new(MockOnboardingApi::new(log.clone()));
    let navigator = Arc::new(MockNavigator {
        log: log.clone(),
        current: Mutex::new(Some(Route::Onboarding)),
    });
    let sequencer = OnboardingSequencer::new(
        onboarding_api.clone(),
        navigator.clone(),
        session.clone(),
    );

    Harness {
        sequencer,
        session,
        onboarding_api,
        navigator,
        log,
    }
}

fn business_details() -> StepPayload {
    StepPayload::BusinessDetails(BusinessDetails {
        business_name: "Juma Hardware".to_string(),
        business_type: "Limited Company".to_string(),
        industry: "Retail".to_string(),
        registration_number: Some("TZ-123".to_string()),
        address: None,
        city: Some("Arusha".to_string()),
        country: Some("Tanzania".to_string()),
    })
}

fn goals() -> StepPayload {
    StepPayload::Goals(BusinessGoals {
        primary_goal: "Expand Business".to_string(),
        target_revenue: None,
        target_profit: None,
        time_frame: Some("12 months".to_string()),
        additional_goals: None,
    })
}

fn finances() -> StepPayload {
    StepPayload::IncomeExpense(IncomeExpenseSetup {
        monthly_income: Some(2_000_000.0),
        income_sources: Some(vec!["Retail sales".to_string()]),
        monthly_expenses: Some(1_200_000.0),
        expense_categories: Some(vec![ExpenseCategory {
            name: "Stock".to_string(),
            amount: 800_000.0,
            frequency: ExpenseFrequency::Monthly,
        }]),
    })
}

#[tokio::test]
async fn onboarding_flow_saves_each_step_then_completes_before_navigating() {
    let harness = build_harness().await;

    let state = harness.sequencer.submit(business_details()).await;
    assert_eq!(state.step, OnboardingStep::Goals);

    let state = harness.sequencer.submit(goals()).await;
    assert_eq!(state.step, OnboardingStep::IncomeExpense);

    let state = harness.sequencer.submit(finances()).await;
    assert!(state.completed());

    assert_eq!(
        *harness.log.lock().unwrap(),
        vec![
            "save_business_details",
            "save_goals",
            "save_income_expense",
            "complete",
            "navigate:/dashboard",
        ]
    );
    assert_eq!(harness.navigator.current(), Some(Route::Dashboard));

    // The guard now lets the user onto the dashboard.
    let snapshot = harness.session.snapshot();
    assert!(!snapshot.is_loading);
    assert!(snapshot.onboarding_completed());
    let guard = RouteGuard::new(false);
    assert_eq!(
        guard.evaluate_route(Route::Dashboard, &harness.session.snapshot()),
        GuardDecision::Render
    );
}

#[tokio::test]
async fn onboarding_flow_rejected_save_never_advances() {
    let harness = build_harness().await;
    harness.sequencer.submit(business_details()).await;
    harness.onboarding_api.fail_next(
        "save_goals",
        ApiError::Status {
            status: 500,
            message: None,
        },
    );

    let state = harness.sequencer.submit(goals()).await;

    assert_eq!(state.step, OnboardingStep::Goals);
    assert_eq!(state.phase, WizardPhase::Editing);
    assert_eq!(state.error.as_deref(), Some("Failed to save goals"));

    // Retrying after the failure advances normally.
    let state = harness.sequencer.submit(goals()).await;
    assert_eq!(state.step, OnboardingStep::IncomeExpense);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn onboarding_flow_complete_failure_stays_on_last_step() {
    let harness = build_harness().await;
    harness.sequencer.submit(business_details()).await;
    harness.sequencer.submit(goals()).await;
    harness.onboarding_api.fail_next(
        "complete",
        ApiError::Status {
            status: 409,
            message: Some("Onboarding already completed elsewhere".to_string()),
        },
    );

    let state = harness.sequencer.submit(finances()).await;

    assert_eq!(state.step, OnboardingStep::IncomeExpense);
    assert!(!state.completed());
    assert_eq!(
        state.error.as_deref(),
        Some("Onboarding already completed elsewhere")
    );
    assert_eq!(harness.navigator.current(), Some(Route::Onboarding));
    assert!(!harness.session.snapshot().onboarding_completed());
}

#[tokio::test]
async fn onboarding_flow_skip_goes_to_dashboard_without_complete() {
    let harness = build_harness().await;
    harness.sequencer.submit(business_details()).await;

    let state = harness.sequencer.skip().await;

    assert!(state.is_finished());
    assert!(!state.completed());
    let log = harness.log.lock().unwrap().clone();
    assert_eq!(log, vec!["save_business_details", "navigate:/dashboard"]);
    assert!(!log.iter().any(|call| call == "complete"));
}

#[tokio::test]
async fn onboarding_flow_back_then_reset() {
    let harness = build_harness().await;
    harness.sequencer.submit(business_details()).await;

    let state = harness.sequencer.back().await;
    assert_eq!(state.step, OnboardingStep::BusinessDetails);
    assert_eq!(harness.log.lock().unwrap().len(), 1);

    harness.sequencer.skip().await;
    let state = harness.sequencer.reset().await;
    assert_eq!(state.step, OnboardingStep::BusinessDetails);
    assert!(!state.is_finished());
}
