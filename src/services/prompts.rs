//! Day-of-week marketing guidance fed to the content generator.

use chrono::Weekday;
use std::collections::HashMap;

/// Immutable weekday-to-guidance table, loaded at startup.
#[derive(Debug, Clone)]
pub struct PromptTable {
    entries: HashMap<Weekday, String>,
}

impl PromptTable {
    /// Build a table from an explicit map. Tables missing one of the seven
    /// days are legal to construct; the lookup reports the gap instead.
    pub fn new(entries: HashMap<Weekday, String>) -> Self {
        Self { entries }
    }

    /// Guidance for the given weekday, if configured.
    pub fn guidance(&self, day: Weekday) -> Option<&str> {
        self.entries.get(&day).map(String::as_str)
    }
}

impl Default for PromptTable {
    fn default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            Weekday::Mon,
            "Day 1 (Monday): Reflection & Teasers Tactic: Start the week by reflecting on the past week's results. Example Post: 🔥 Last week's bets gave our members a whopping 50% profit on turnover including bonus backs! Curious about our strategy? Check our results here: https://bit.ly/propunterresults. 📊".to_string(),
        );
        entries.insert(
            Weekday::Tue,
            "Day 2 (Tuesday): Testimonial Tuesday Tactic: Share testimonials from satisfied paid members. Example Post: 🗣️ 'Thanks to Propunter Premium, I've made consistent profits every week!' - [Dave M. - update to random name] Galloping Gains Weekly/Champion's Monthly/Triple Crown Annual Member. Want to experience the same? We have 2 strategies available, our Premium WIN strategy and our Precision Place Strategy! 🏇🏽 Add the membership bot @ProPunter_bot or @ProPunterPlace_bot and use the /subscribe command".to_string(),
        );
        entries.insert(
            Weekday::Wed,
            "Day 3 (Wednesday): Big Race Day Promo Tactic: Offer a flash sale discount for new members, especially given that it's a big race day. Example Post: 🚀 WEDNESDAY FLASH SALE 🚀: Get 30% off our Champion's Choice Monthly plan for today only! Dive into today's races with expert tips! Use code: WEDRACE30 at checkout - Only for 1st time members".to_string(),
        );
        entries.insert(
            Weekday::Thu,
            "Day 4 (Thursday): Behind the Scenes Tactic: Share a behind-the-scenes look into how you select the tips – this builds trust and curiosity. Example Post: Ever wondered how we pick our winning horses? 🐎 We use a combination of Artificial Intelligence and a tonne of quantitative data to make our decisions in the last few minutes before every race. We believe that the flow of (smart) money often determines the race outcomes so we follow the money! ➡️ And for the full experience, join our premium channel!".to_string(),
        );
        entries.insert(
            Weekday::Fri,
            "Day 5 (Friday): Weekend Warm-up Tactic: Hype the upcoming big race day and showcase the potential value of the premium channel for the weekend. Example Post: Weekend's here and so are the biggest races! 🏆 Get ready for tomorrow's 20+ races. Our premium members are already armed with the best tips. Want in? Join now and don't miss out! Add the membership bot @ProPunter_bot or @ProPunterPlace_bot and use the /subscribe command".to_string(),
        );
        entries.insert(
            Weekday::Sat,
            "Day 6 (Saturday): Big Race Day Bonanza Tactic: Offer a limited-time discount for the weekly plan to entice users to experience the premium channel during the biggest race day. Example Post: 🎉 SATURDAY SPECIAL 🎉: Dive into today's 20+ races with our expert tips! Get 50% off our Galloping Gains Weekly plan for today only and for new members only! Experience the thrill of premium betting. Use code: SATBONANZA at checkout. Add the membership bot @ProPunter_bot and use the /subscribe command".to_string(),
        );
        entries.insert(
            Weekday::Sun,
            "Day 7 (Sunday): Reflection & Relaxation Tactic: Share aggregate results of Saturday's races and encourage members to gear up for the upcoming week. Example Post: What an exhilarating race day! 🎊 Our tips yielded fantastic results. Check out the full breakdown here: https://bit.ly/propunterresults. Relax and recharge today, and get ready for another week of top-notch tips! 🌟".to_string(),
        );
        Self { entries }
    }
}
