//! Static reference content: example use cases, templates, and checklist labels
//!
//! Everything here is read-only. Example blocks are display-only and never
//! written into the document; chips and choices are the only entries that
//! flow back as field values.

use crate::state::{RiskLevel, ScalarField};

/// Department name and its example automation use cases
pub struct Department {
    pub name: &'static str,
    pub use_cases: [&'static str; 5],
}

pub const DEPARTMENTS: [Department; 6] = [
    Department {
        name: "Finance & Accounting",
        use_cases: [
            "Automated invoice processing and approval workflows",
            "Payment follow-up and dunning management",
            "Expense report approval and reimbursement",
            "Month-end closing automation",
            "Vendor payment reconciliation",
        ],
    },
    Department {
        name: "Sales & Account Management",
        use_cases: [
            "Lead qualification and routing automation",
            "Contract renewal alert and management",
            "Sales pipeline progression tracking",
            "Customer onboarding workflow automation",
            "Commission calculation and reporting",
        ],
    },
    Department {
        name: "Marketing (B2B)",
        use_cases: [
            "Multi-channel campaign orchestration",
            "Lead scoring and nurturing automation",
            "Marketing qualified lead (MQL) handoff",
            "Content approval and publishing workflows",
            "Campaign performance reporting automation",
        ],
    },
    Department {
        name: "Customer Support/Success",
        use_cases: [
            "Ticket routing and escalation management",
            "Customer health score monitoring",
            "Automated response and resolution workflows",
            "Onboarding milestone tracking",
            "Churn risk identification and intervention",
        ],
    },
    Department {
        name: "Procurement/IT Operations",
        use_cases: [
            "Supplier onboarding and compliance verification",
            "Purchase order approval workflows",
            "Asset lifecycle management",
            "Vendor performance monitoring",
            "Contract management and renewals",
        ],
    },
    Department {
        name: "Supply Chain & Logistics",
        use_cases: [
            "Shipment tracking and exception management",
            "Inventory reorder point automation",
            "Supplier performance monitoring",
            "Delivery confirmation and invoicing",
            "Returns processing automation",
        ],
    },
];

/// Example use cases for a department name, empty when unknown
pub fn use_cases_for(department: &str) -> &'static [&'static str] {
    DEPARTMENTS
        .iter()
        .find(|d| d.name == department)
        .map(|d| d.use_cases.as_slice())
        .unwrap_or(&[])
}

/// Stored value and display label of an evidence type
pub struct EvidenceType {
    pub value: &'static str,
    pub label: &'static str,
}

pub const EVIDENCE_TYPES: [EvidenceType; 6] = [
    EvidenceType {
        value: "industry-report",
        label: "Industry Report/Study",
    },
    EvidenceType {
        value: "company-data",
        label: "Internal Company Data",
    },
    EvidenceType {
        value: "survey-research",
        label: "Survey/Research Data",
    },
    EvidenceType {
        value: "case-study",
        label: "Published Case Study",
    },
    EvidenceType {
        value: "interview",
        label: "Stakeholder Interview",
    },
    EvidenceType {
        value: "benchmark",
        label: "Industry Benchmark",
    },
];

pub fn evidence_label(value: &str) -> Option<&'static str> {
    EVIDENCE_TYPES
        .iter()
        .find(|e| e.value == value)
        .map(|e| e.label)
}

pub const TRIGGER_TYPES: [&str; 5] = [
    "Schedule-based",
    "Event-triggered",
    "Manual initiation",
    "Threshold-based",
    "API webhook",
];

pub const STAKEHOLDER_EXAMPLES: [&str; 11] = [
    "Finance Manager",
    "Accounts Payable",
    "CFO",
    "Operations Manager",
    "Sales Director",
    "Account Managers",
    "Customer Success",
    "IT Admin",
    "Procurement Manager",
    "Vendor Relations",
    "Compliance Officer",
];

pub const BENEFICIARY_TYPES: [&str; 8] = [
    "Direct Users",
    "Management",
    "Customers",
    "Partners",
    "Vendors",
    "IT Department",
    "Compliance Team",
    "Executive Leadership",
];

pub const KPI_EXAMPLES: [&str; 8] = [
    "Time savings (hours/week reduced)",
    "Error reduction (% decrease in manual errors)",
    "Cost avoidance ($ saved annually)",
    "Processing speed improvement (% faster)",
    "Employee productivity increase (%)",
    "Customer satisfaction improvement (NPS/CSAT)",
    "Compliance adherence (% improvement)",
    "Revenue impact ($ increase/retention)",
];

pub struct KpiTemplate {
    pub metric: &'static str,
    pub current: &'static str,
    pub target: &'static str,
    pub impact: &'static str,
}

pub const KPI_TEMPLATES: [KpiTemplate; 3] = [
    KpiTemplate {
        metric: "Processing Time",
        current: "4 hours per transaction",
        target: "15 minutes per transaction",
        impact: "87.5% time reduction",
    },
    KpiTemplate {
        metric: "Error Rate",
        current: "12% manual errors",
        target: "1% automated errors",
        impact: "91% error reduction",
    },
    KpiTemplate {
        metric: "Cost per Transaction",
        current: "$25 per transaction",
        target: "$3 per transaction",
        impact: "$22 cost savings per transaction",
    },
];

pub struct ExampleStep {
    pub title: &'static str,
    pub trigger: &'static str,
    pub systems: &'static [&'static str],
    pub duration: &'static str,
}

pub const WORKFLOW_EXAMPLE_TITLE: &str = "Invoice Processing Automation";

pub const WORKFLOW_EXAMPLE: [ExampleStep; 5] = [
    ExampleStep {
        title: "Invoice Receipt",
        trigger: "Email/Upload",
        systems: &["Email", "Document Scanner"],
        duration: "Instant",
    },
    ExampleStep {
        title: "Data Extraction",
        trigger: "Auto OCR",
        systems: &["OCR Service", "AI Parser"],
        duration: "2 minutes",
    },
    ExampleStep {
        title: "Validation",
        trigger: "Rule Engine",
        systems: &["ERP", "Vendor Database"],
        duration: "5 minutes",
    },
    ExampleStep {
        title: "Approval Routing",
        trigger: "Workflow Engine",
        systems: &["Approval System", "Notifications"],
        duration: "1 hour",
    },
    ExampleStep {
        title: "Payment Processing",
        trigger: "Approval Complete",
        systems: &["Payment Gateway", "Banking API"],
        duration: "30 minutes",
    },
];

pub struct TechStackTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub stack: &'static str,
}

pub const TECH_STACK_TEMPLATES: [TechStackTemplate; 3] = [
    TechStackTemplate {
        name: "Cloud-Native Microservices",
        description: "Node.js/Python, Docker, Kubernetes, Redis, PostgreSQL",
        stack: "Backend: Node.js/Express or Python/FastAPI\nDatabase: PostgreSQL/MongoDB\nCache: Redis\nQueue: RabbitMQ/Apache Kafka\nContainers: Docker + Kubernetes\nCloud: AWS/Azure/GCP\nMonitoring: Prometheus + Grafana",
    },
    TechStackTemplate {
        name: "Enterprise Integration",
        description: "Java Spring, Oracle/SQL Server, Enterprise Service Bus",
        stack: "Backend: Java Spring Boot\nDatabase: Oracle/SQL Server\nIntegration: MuleSoft/Apache Camel\nMessage Queue: IBM MQ/ActiveMQ\nSecurity: OAuth 2.0/SAML\nMonitoring: Splunk/New Relic",
    },
    TechStackTemplate {
        name: "Serverless & AI-Powered",
        description: "AWS Lambda, OpenAI APIs, DynamoDB, Event-driven",
        stack: "Compute: AWS Lambda/Azure Functions\nDatabase: DynamoDB/CosmosDB\nAI/ML: OpenAI API/AWS Bedrock\nEvents: EventBridge/Service Bus\nStorage: S3/Blob Storage\nAPI Gateway: AWS API Gateway",
    },
];

pub struct ApiCategory {
    pub category: &'static str,
    pub apis: &'static str,
}

pub const API_CATEGORIES: [ApiCategory; 6] = [
    ApiCategory {
        category: "CRM",
        apis: "Salesforce API, HubSpot API, Pipedrive API",
    },
    ApiCategory {
        category: "ERP",
        apis: "SAP API, Oracle NetSuite, Microsoft Dynamics",
    },
    ApiCategory {
        category: "Communication",
        apis: "Slack API, Microsoft Teams, Twilio, SendGrid",
    },
    ApiCategory {
        category: "Finance",
        apis: "Stripe API, PayPal API, QuickBooks API, Xero API",
    },
    ApiCategory {
        category: "Document",
        apis: "DocuSign API, Adobe Sign, Google Drive API",
    },
    ApiCategory {
        category: "Data",
        apis: "Google Sheets API, Airtable API, Excel Online API",
    },
];

pub struct FailureExample {
    pub scenario: &'static str,
    pub impact: &'static str,
    pub probability: &'static str,
    pub detection: &'static str,
    pub recovery: &'static str,
    pub prevention: &'static str,
}

/// Impact label assumed when rating the common failure examples
pub const EXAMPLE_IMPACT: &str = "Major";

pub const COMMON_FAILURES: [FailureExample; 3] = [
    FailureExample {
        scenario: "API Service Downtime",
        impact: "Automation stops, manual fallback required",
        probability: "Medium",
        detection: "Health checks, status monitoring",
        recovery: "Retry logic, failover to backup service",
        prevention: "Multiple API providers, circuit breakers",
    },
    FailureExample {
        scenario: "Data Validation Failure",
        impact: "Incorrect processing, potential data corruption",
        probability: "High",
        detection: "Data quality checks, validation rules",
        recovery: "Quarantine bad data, manual review process",
        prevention: "Robust validation, data cleansing pipelines",
    },
    FailureExample {
        scenario: "Authentication Token Expiry",
        impact: "System access denied, process interruption",
        probability: "Medium",
        detection: "Token validation, expiry monitoring",
        recovery: "Automatic token refresh, re-authentication",
        prevention: "Proactive token renewal, refresh logic",
    },
];

pub struct RolloutTemplate {
    pub phase: &'static str,
    pub duration: &'static str,
    pub scope: &'static str,
    pub goals: &'static str,
    pub criteria: &'static str,
    pub risks: &'static str,
}

pub const ROLLOUT_TEMPLATE: [RolloutTemplate; 3] = [
    RolloutTemplate {
        phase: "Pilot Phase",
        duration: "4-6 weeks",
        scope: "Single department, 10-20 users",
        goals: "Validate functionality, identify issues, gather feedback",
        criteria: "90% success rate, user acceptance > 80%",
        risks: "Limited scope may not reveal all issues",
    },
    RolloutTemplate {
        phase: "Limited Rollout",
        duration: "8-10 weeks",
        scope: "2-3 departments, 100+ users",
        goals: "Scale testing, process refinement, performance validation",
        criteria: "95% success rate, response time < 30s",
        risks: "Integration challenges between departments",
    },
    RolloutTemplate {
        phase: "Full Deployment",
        duration: "12-16 weeks",
        scope: "Organization-wide, all users",
        goals: "Complete automation implementation, full benefits realization",
        criteria: "99% uptime, KPI targets achieved",
        risks: "Change resistance, system overload",
    },
];

pub const SECURITY_CHECKLIST: [&str; 12] = [
    "Data encryption at rest and in transit",
    "Multi-factor authentication (MFA)",
    "Role-based access control (RBAC)",
    "API rate limiting and throttling",
    "Audit logging for all operations",
    "Regular security vulnerability scans",
    "Data backup and disaster recovery",
    "GDPR/CCPA compliance measures",
    "Network security and VPN access",
    "Secure API key management",
    "Database connection security",
    "File upload validation and scanning",
];

pub struct ComplianceFramework {
    pub name: &'static str,
    pub description: &'static str,
}

pub const COMPLIANCE_FRAMEWORKS: [ComplianceFramework; 6] = [
    ComplianceFramework {
        name: "GDPR",
        description: "European data protection regulation",
    },
    ComplianceFramework {
        name: "CCPA",
        description: "California consumer privacy act",
    },
    ComplianceFramework {
        name: "SOC 2",
        description: "Security and availability controls",
    },
    ComplianceFramework {
        name: "ISO 27001",
        description: "Information security management",
    },
    ComplianceFramework {
        name: "HIPAA",
        description: "Healthcare data protection (if applicable)",
    },
    ComplianceFramework {
        name: "PCI DSS",
        description: "Payment card industry standards",
    },
];

pub struct DataTier {
    pub name: &'static str,
    pub risk: RiskLevel,
    pub description: &'static str,
}

pub const DATA_TIERS: [DataTier; 4] = [
    DataTier {
        name: "Public",
        risk: RiskLevel::Low,
        description: "Marketing content, public documentation",
    },
    DataTier {
        name: "Internal",
        risk: RiskLevel::Medium,
        description: "Employee data, internal processes",
    },
    DataTier {
        name: "Confidential",
        risk: RiskLevel::High,
        description: "Financial records, customer PII",
    },
    DataTier {
        name: "Restricted",
        risk: RiskLevel::Critical,
        description: "Trade secrets, payment information",
    },
];

pub const WRITING_TIPS: [&str; 4] = [
    "Be specific about the business impact (time, cost, errors)",
    "Focus on recurring, multi-step operational challenges",
    "Mention the target department or role affected",
    "Keep it concise but impactful",
];

pub const EVIDENCE_REQUIREMENTS: [&str; 4] = [
    "Provide credible, specific evidence (stats, reports, studies)",
    "Quantify the impact where possible (time, cost, errors)",
    "Reference reputable sources (McKinsey, Deloitte, industry reports)",
    "Consider including URLs or citations for verification",
];

pub const STAKEHOLDER_TIPS: [&str; 4] = [
    "Be specific: Include job titles, departments, and team sizes",
    "Show impact: Explain how each group benefits or is affected",
    "Consider hierarchy: Include both end-users and decision-makers",
    "Think broader: Consider customers, vendors, and partners too",
];

/// Hint shown inside an empty input
pub fn placeholder(field: ScalarField) -> &'static str {
    match field {
        ScalarField::Title => "e.g., Automated Invoice Processing & Payment Follow-up System",
        ScalarField::Summary => "e.g., B2B companies waste 40+ hours weekly on manual invoice processing...",
        ScalarField::ProblemDescription => "Describe the specific operational challenges, current manual processes, bottlenecks, and business impact...",
        ScalarField::EvidenceType => "Select evidence type",
        ScalarField::EvidenceDetails => "e.g., McKinsey study shows 65% time spent on manual processes",
        ScalarField::SelectedDepartment => "Select the primary department affected",
        ScalarField::PainPoints => "List the main pain points: time waste, errors, compliance issues, customer impact, etc.",
        ScalarField::PrimaryStakeholders => "List the main users who will interact with the automation system daily...",
        ScalarField::Beneficiaries => "Describe who benefits from this automation and how...",
        ScalarField::ImpactedRoles => "Detail how different roles and departments will be affected by this automation...",
        ScalarField::BusinessImpact => "Describe the cumulative business value, ROI expectations, and strategic benefits...",
        ScalarField::SystemsInvolved => "List all systems, APIs, databases, and third-party services that will be integrated...",
        ScalarField::TechStack => "List programming languages, frameworks, databases, cloud services, and tools you'll use...",
        ScalarField::ApiIntegrations => "Detail all APIs, webhooks, and data sources. Include authentication methods, rate limits, data formats...",
        ScalarField::DataFlow => "Explain how data moves through the system, transformations, validations, storage, and retrieval patterns...",
        ScalarField::Architecture => "Describe the overall system design, microservices, data architecture, security layers...",
        ScalarField::DevelopmentPhases => "Phase 1 (Core automation), Phase 2 (Advanced features), Phase 3 (Scale & optimize)...",
        ScalarField::MonitoringStrategy => "Describe monitoring tools, alert thresholds, escalation procedures, dashboards, and key metrics...",
        ScalarField::DataClassification => "Classify the types of data handled: PII, financial records, business secrets...",
        ScalarField::SecurityMeasures => "Detail encryption methods, authentication mechanisms, network security, vulnerability management...",
        ScalarField::PrivacyCompliance => "Address GDPR, CCPA, and other relevant regulations. Include data retention policies...",
        ScalarField::AccessControls => "Define user roles, permissions, authentication flows, session management...",
        ScalarField::ChangeManagement => "How will you manage organizational change? Training programs, communication plans...",
        ScalarField::SuccessMetrics => "Define how you'll measure overall rollout success: adoption rates, performance metrics...",
    }
}
