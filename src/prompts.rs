//! Prompt templates for the VC-analyst persona.

pub const SYSTEM_PROMPT: &str = "You are a professional VC analyst who loves looking into innovative and profitable products. \
You help evaluate startups, analyze market opportunities, assess business models, and provide insights on investment potential. \
Be concise, data-driven, and focus on actionable insights. Always consider market size, competitive landscape, and scalability.";

pub fn discover_prompt(query: &str, industry: Option<&str>, stage: Option<&str>) -> String {
    let mut prompt = format!(
        "As a VC analyst, help me discover startups.\n\nSearch query: {query}\n"
    );
    // "all" is the frontend's no-filter sentinel
    if let Some(industry) = industry.filter(|i| *i != "all") {
        prompt.push_str(&format!("Industry filter: {industry}\n"));
    }
    if let Some(stage) = stage.filter(|s| *s != "all") {
        prompt.push_str(&format!("Stage filter: {stage}\n"));
    }
    prompt.push_str(
        "\nPlease provide a list of 5-10 relevant startups that match this search. For each startup, provide:\n\
         - Name\n\
         - Industry\n\
         - Stage (Pre-Seed, Seed, Series A, Series B, Series C+)\n\
         - Brief description (1-2 sentences)\n\
         - Location\n\
         - Founded year\n\
         - Team size estimate\n\n\
         Format the response as a clear list with these details for each startup.",
    );
    prompt
}

/// Analysis prompt for the requested aspect; unknown types fall back to the
/// comprehensive template.
pub fn analysis_prompt(startup_name: &str, analysis_type: &str) -> String {
    match analysis_type {
        "ip" => format!(
            "Analyze the intellectual property portfolio of {startup_name}. Include:\n\
             - Number of patents (active and pending)\n\
             - Key patent areas/technologies\n\
             - Trademarks and brand protection\n\
             - Proprietary technology or trade secrets\n\
             - IP strategy and competitive advantages"
        ),
        "financials" => format!(
            "Analyze the financial metrics of {startup_name}. Include:\n\
             - Funding rounds and amounts raised\n\
             - Revenue estimates (ARR if available)\n\
             - Growth rate (YoY)\n\
             - Unit economics (CAC, LTV, margins)\n\
             - Burn rate and runway\n\
             - Valuation estimates if known"
        ),
        "team" => format!(
            "Analyze the founding team of {startup_name}. Include:\n\
             - Key team members and their roles\n\
             - Professional backgrounds and previous experience\n\
             - Education and expertise\n\
             - Track record and achievements\n\
             - Team composition and gaps"
        ),
        "market" => format!(
            "Analyze the market position of {startup_name}. Include:\n\
             - Target market size (TAM, SAM, SOM)\n\
             - Competitive landscape and key competitors\n\
             - Market share and positioning\n\
             - Competitive advantages and differentiation\n\
             - Market trends and opportunities"
        ),
        _ => format!(
            "Provide a comprehensive analysis of {startup_name}. Include:\n\
             1. Company Overview - brief description, business model, value proposition\n\
             2. Intellectual Property - patents, trademarks, proprietary technology\n\
             3. Financial Health - funding rounds, revenue estimates, growth metrics, unit economics\n\
             4. Founding Team - key members, backgrounds, experience\n\
             5. Market Position - competitive landscape, market size, differentiation\n\n\
             Be detailed and data-driven."
        ),
    }
}

pub fn search_prompt(query: &str, search_type: &str) -> String {
    let search_scope = match search_type {
        "startups" => "startup companies",
        "founders" => "founders and entrepreneurs",
        "technologies" => "technologies and tech stacks",
        "markets" => "market trends and opportunities",
        _ => "startups, founders, technologies, and market trends",
    };

    format!(
        "As a VC analyst, help me search for information about: {query}\n\n\
         Search scope: {search_scope}\n\n\
         Please provide relevant results. For each result, include:\n\
         - Title/Name\n\
         - Type (startup, founder, technology, or market trend)\n\
         - Brief description\n\
         - Key details or metadata\n\n\
         Format as a clear list with 5-10 relevant results."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_prompt_skips_all_sentinel_filters() {
        let prompt = discover_prompt("fintech infra", Some("all"), Some("Seed"));
        assert!(!prompt.contains("Industry filter"));
        assert!(prompt.contains("Stage filter: Seed"));
    }

    #[test]
    fn unknown_analysis_type_falls_back_to_comprehensive() {
        let prompt = analysis_prompt("Acme", "vibes");
        assert!(prompt.contains("comprehensive analysis of Acme"));
    }
}
