//! Static guidance for insurance denial reason codes.
//!
//! Each entry pairs a claim adjustment reason code with the questions an agent should ask the
//! payer representative, the form fields worth capturing, and the usual next steps. Lookups are
//! plain table accesses; there is no computation beyond normalizing the code.

/// Guidance attached to one denial code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenialGuidance {
    pub code: &'static str,
    pub description: &'static str,
    pub questions: &'static [&'static str],
    pub required_fields: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

static GUIDANCE: &[DenialGuidance] = &[
    DenialGuidance {
        code: "CO-4",
        description: "The procedure code is inconsistent with the modifier used or a required modifier is missing",
        questions: &[
            "Which modifier is missing or invalid on the claim line?",
            "Can the claim be corrected and resubmitted, or is a reconsideration required?",
            "What is the corrected claim filing limit?",
        ],
        required_fields: &["rep_name", "call_reference", "date_of_service", "notes"],
        next_steps: &[
            "Route to coding to review modifiers for the DOS",
            "Submit a corrected claim with frequency code 7 once coding confirms",
        ],
    },
    DenialGuidance {
        code: "CO-11",
        description: "The diagnosis is inconsistent with the procedure",
        questions: &[
            "Which diagnosis code was considered inconsistent?",
            "Does the payer's policy list covered diagnoses for this procedure?",
            "Is a corrected claim or medical records required?",
        ],
        required_fields: &["rep_name", "call_reference", "date_of_service", "notes"],
        next_steps: &[
            "Send to coding for diagnosis review against the payer policy",
            "Resubmit a corrected claim or appeal with records as advised",
        ],
    },
    DenialGuidance {
        code: "CO-16",
        description: "Claim/service lacks information or has submission/billing error(s)",
        questions: &[
            "What information is missing or invalid on the claim?",
            "Is the missing information at the claim or the line level?",
            "Can the claim be reprocessed over the phone, or must it be resubmitted?",
        ],
        required_fields: &["rep_name", "call_reference", "date_of_service", "notes"],
        next_steps: &[
            "Obtain the missing information from registration or the provider",
            "Submit a corrected claim with the missing data",
        ],
    },
    DenialGuidance {
        code: "CO-18",
        description: "Exact duplicate claim/service",
        questions: &[
            "What is the claim number and status of the original claim?",
            "Was the original claim paid, denied, or still in process?",
            "If the services were distinct, what documentation does the payer need?",
        ],
        required_fields: &["rep_name", "call_reference", "date_of_service", "notes"],
        next_steps: &[
            "Post the duplicate denial against the original claim's outcome",
            "If services were distinct, resubmit with the appropriate modifier",
        ],
    },
    DenialGuidance {
        code: "CO-22",
        description: "This care may be covered by another payer per coordination of benefits",
        questions: &[
            "Which other payer does the plan have on file, and as primary or secondary?",
            "What is the effective date of the other coverage?",
            "Does the patient need to update their COB information with the plan?",
        ],
        required_fields: &[
            "rep_name",
            "call_reference",
            "eligibility_effective_date",
            "eligibility_status",
            "notes",
        ],
        next_steps: &[
            "Contact the patient to update coordination of benefits",
            "Bill the primary payer, then submit the secondary claim with the primary EOB",
        ],
    },
    DenialGuidance {
        code: "CO-27",
        description: "Expenses incurred after coverage terminated",
        questions: &[
            "What was the coverage termination date?",
            "Is there any other active coverage on file for the patient?",
            "Was the termination retroactive, and when was it processed?",
        ],
        required_fields: &[
            "rep_name",
            "call_reference",
            "date_of_service",
            "eligibility_effective_date",
            "eligibility_status",
        ],
        next_steps: &[
            "Verify eligibility for the date of service",
            "Ask the patient for updated insurance information",
            "Bill the new payer or transfer the balance to patient responsibility",
        ],
    },
    DenialGuidance {
        code: "CO-29",
        description: "The time limit for filing has expired",
        questions: &[
            "What is the timely filing limit for this plan?",
            "When did the payer first receive the claim?",
            "Will the payer accept proof of timely filing, and in what form?",
        ],
        required_fields: &["rep_name", "call_reference", "date_of_service", "notes"],
        next_steps: &[
            "Pull clearinghouse acceptance reports as proof of timely filing",
            "Submit a reconsideration with the proof, or adjust off if none exists",
        ],
    },
    DenialGuidance {
        code: "CO-45",
        description: "Charge exceeds fee schedule/maximum allowable or contracted/legislated fee arrangement",
        questions: &[
            "What allowed amount was applied to the claim?",
            "Which fee schedule or contract was used to price the claim?",
        ],
        required_fields: &["rep_name", "call_reference", "notes"],
        next_steps: &[
            "Compare the allowed amount to the contracted rate",
            "Post the contractual adjustment, or dispute the pricing if it is incorrect",
        ],
    },
    DenialGuidance {
        code: "CO-50",
        description: "These are non-covered services because this is not deemed a 'medical necessity' by the payer",
        questions: &[
            "Which medical policy was applied to the denial?",
            "What documentation is needed to support medical necessity?",
            "What is the appeal deadline and where should it be sent?",
        ],
        required_fields: &["rep_name", "call_reference", "date_of_service", "notes"],
        next_steps: &[
            "Request medical records from the provider",
            "File an appeal with a letter of medical necessity before the deadline",
        ],
    },
    DenialGuidance {
        code: "CO-97",
        description: "The benefit for this service is included in the payment/allowance for another service/procedure that has already been adjudicated",
        questions: &[
            "Which service was this bundled into?",
            "Would a modifier allow separate reimbursement?",
        ],
        required_fields: &["rep_name", "call_reference", "date_of_service", "notes"],
        next_steps: &[
            "Have coding review bundling edits for the DOS",
            "Resubmit with the appropriate modifier, or adjust off if correctly bundled",
        ],
    },
    DenialGuidance {
        code: "CO-109",
        description: "Claim/service not covered by this payer/contractor",
        questions: &[
            "Which payer or contractor should the claim be sent to?",
            "Is the patient's plan administered by a different entity?",
        ],
        required_fields: &["rep_name", "call_reference", "eligibility_status", "notes"],
        next_steps: &[
            "Update the payer on the account",
            "Submit the claim to the correct payer or contractor",
        ],
    },
    DenialGuidance {
        code: "CO-197",
        description: "Precertification/authorization/notification/pre-treatment absent",
        questions: &[
            "Was an authorization on file for the date of service?",
            "Can a retro-authorization be requested, and how?",
            "What is the appeal deadline?",
        ],
        required_fields: &["rep_name", "call_reference", "date_of_service", "notes"],
        next_steps: &[
            "Check the authorization log for the DOS",
            "Request a retro-authorization or appeal with clinical documentation",
        ],
    },
    DenialGuidance {
        code: "PR-1",
        description: "Deductible amount",
        questions: &[
            "How much was applied to the deductible?",
            "How much of the deductible remains for the plan year?",
        ],
        required_fields: &["rep_name", "call_reference", "eligibility_status", "notes"],
        next_steps: &["Transfer the deductible amount to patient responsibility and send a statement"],
    },
];

/// Canonical form of a code for lookups: trimmed and upper-cased.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Look up guidance for a denial code. Unknown codes yield `None`.
pub fn guidance(code: &str) -> Option<&'static DenialGuidance> {
    let code = normalize_code(code);
    GUIDANCE.iter().find(|g| g.code == code)
}

/// All known denial codes, in table order.
pub fn all() -> &'static [DenialGuidance] {
    GUIDANCE
}
