use super::{Template, TemplateKey};
use crate::workflows::comparison::domain::DimensionKey::{Engagement, Expression, Reassurance, Repair};
use crate::workflows::comparison::domain::Direction::{AHigher, BHigher};
use crate::workflows::comparison::domain::Relation::{Different, Similar, VeryDifferent};
use crate::workflows::comparison::domain::Section;
use crate::workflows::comparison::domain::Section::{
    DominantDifference, FeltExperience, KeyDifferences, Loop, MentalMap, Triggers,
};
use crate::workflows::comparison::domain::Variance::{Aligned, Incomplete, SeverelyIncomplete, Split};

const fn key(section: Section) -> TemplateKey {
    TemplateKey::section(section)
}

// Append-only. Loop texts name their subjects with bare `A` / `B` tokens and
// must not use the article "A"; every other section uses `{a}` / `{b}`.
const STANDARD_TEMPLATES: &[(&str, TemplateKey, &str)] = &[
    // Dominant difference
    (
        "D01",
        key(DominantDifference).dimension(Engagement),
        "The biggest gap between {a} and {b} is how quickly each of you moves toward a disagreement. One of you wants to face it now; the other needs distance before it feels safe to engage.",
    ),
    (
        "D02",
        key(DominantDifference).dimension(Expression),
        "The biggest gap between {a} and {b} is how openly feelings get said out loud. What feels like honesty to one of you can feel like a flood to the other.",
    ),
    (
        "D03",
        key(DominantDifference).dimension(Reassurance),
        "The biggest gap between {a} and {b} is how much reassurance each of you needs when things feel uncertain. Silence reads very differently to each of you.",
    ),
    (
        "D04",
        key(DominantDifference).dimension(Repair),
        "The biggest gap between {a} and {b} is the pace of repair. One of you is ready to reconnect soon after a conflict; the other needs more time before coming back together.",
    ),
    // Mental map
    (
        "M01",
        key(MentalMap).dimension(Engagement).relation(Similar),
        "{a} and {b} approach disagreements at a similar speed, so neither of you is usually left waiting or chasing.",
    ),
    (
        "M02",
        key(MentalMap).dimension(Engagement).relation(Different),
        "{a} and {b} approach disagreements at noticeably different speeds; naming who needs a pause can prevent one of you from feeling ambushed.",
    ),
    (
        "M03",
        key(MentalMap).dimension(Engagement).relation(VeryDifferent),
        "{a} and {b} sit at opposite ends of conflict engagement: one moves in fast while the other instinctively steps back.",
    ),
    (
        "M04",
        key(MentalMap).dimension(Expression).relation(Similar),
        "{a} and {b} voice feelings in a similar way, which makes emotional conversations easier to read.",
    ),
    (
        "M05",
        key(MentalMap).dimension(Expression).relation(Different),
        "{a} and {b} express emotion at different volumes; the quieter signals are easy to miss.",
    ),
    (
        "M06",
        key(MentalMap).dimension(Expression).relation(VeryDifferent),
        "{a} and {b} have very different emotional volumes: one says everything, the other keeps most of it inside.",
    ),
    (
        "M07",
        key(MentalMap).dimension(Reassurance).relation(Similar),
        "{a} and {b} need a similar amount of reassurance, so check-ins tend to land as intended.",
    ),
    (
        "M08",
        key(MentalMap).dimension(Reassurance).relation(Different),
        "{a} and {b} need different amounts of reassurance; what feels like plenty to one can feel thin to the other.",
    ),
    (
        "M09",
        key(MentalMap).dimension(Reassurance).relation(VeryDifferent),
        "{a} and {b} are far apart on reassurance: one needs frequent confirmation, the other rarely thinks to offer it.",
    ),
    (
        "M10",
        key(MentalMap).dimension(Repair).relation(Similar),
        "{a} and {b} are ready to repair on a similar timeline after conflict.",
    ),
    (
        "M11",
        key(MentalMap).dimension(Repair).relation(Different),
        "{a} and {b} reconnect at different speeds; agreeing on a time to come back together helps.",
    ),
    (
        "M12",
        key(MentalMap).dimension(Repair).relation(VeryDifferent),
        "{a} and {b} have very different repair clocks: one wants to make up within minutes, the other needs a day or more.",
    ),
    // Key differences
    (
        "K01",
        key(KeyDifferences).dimension(Engagement).relation(Similar).variance(Aligned),
        "{a} and {b} share a comfort level with conflict, so disagreements rarely turn into a chase.",
    ),
    (
        "K02",
        key(KeyDifferences).dimension(Engagement).relation(Similar).variance(Split),
        "{a} and {b} are close on conflict engagement, though on a hard day one of you may lean in a little sooner.",
    ),
    (
        "K03",
        key(KeyDifferences).dimension(Engagement).relation(Different).direction(AHigher),
        "{a} tends to raise issues right away, while {b} prefers to think first. {a} can help by flagging a topic and offering a later time; {b} can help by naming when that time will be.",
    ),
    (
        "K04",
        key(KeyDifferences).dimension(Engagement).relation(Different).direction(BHigher),
        "{b} tends to raise issues right away, while {a} prefers to think first. {b} can help by flagging a topic and offering a later time; {a} can help by naming when that time will be.",
    ),
    (
        "K05",
        key(KeyDifferences).dimension(Expression).relation(Similar).variance(Aligned),
        "{a} and {b} express feelings at a similar volume, so neither of you has to decode the other.",
    ),
    (
        "K06",
        key(KeyDifferences).dimension(Expression).relation(Similar).variance(Split),
        "{a} and {b} express feelings in similar ways, with small differences that show up mostly under stress.",
    ),
    (
        "K07",
        key(KeyDifferences).dimension(Expression).relation(Different).direction(AHigher),
        "{a} puts feelings into words readily; {b} shows them more quietly. {a} may need to leave room, and {b} may need to say a little more than feels natural.",
    ),
    (
        "K08",
        key(KeyDifferences).dimension(Expression).relation(Different).direction(BHigher),
        "{b} puts feelings into words readily; {a} shows them more quietly. {b} may need to leave room, and {a} may need to say a little more than feels natural.",
    ),
    (
        "K09",
        key(KeyDifferences).dimension(Reassurance).relation(Similar).variance(Aligned),
        "{a} and {b} need about the same amount of reassurance, which keeps expectations easy to meet.",
    ),
    (
        "K10",
        key(KeyDifferences).dimension(Reassurance).relation(Similar).variance(Split),
        "{a} and {b} have similar reassurance needs, though one of you may want an extra check-in during busy stretches.",
    ),
    (
        "K11",
        key(KeyDifferences).dimension(Reassurance).relation(Different).direction(AHigher),
        "{a} looks for more reassurance than {b} naturally offers. Small, predictable signals from {b} go a long way.",
    ),
    (
        "K12",
        key(KeyDifferences).dimension(Reassurance).relation(Different).direction(BHigher),
        "{b} looks for more reassurance than {a} naturally offers. Small, predictable signals from {a} go a long way.",
    ),
    (
        "K13",
        key(KeyDifferences).dimension(Repair).relation(Similar).variance(Aligned),
        "{a} and {b} come back together at about the same pace after a disagreement.",
    ),
    (
        "K14",
        key(KeyDifferences).dimension(Repair).relation(Similar).variance(Split),
        "{a} and {b} repair on similar timelines, with one of you occasionally ready a little sooner.",
    ),
    (
        "K15",
        key(KeyDifferences).dimension(Repair).relation(Different).direction(AHigher),
        "{a} wants to repair sooner than {b} is ready to. Agreeing on a check-in time lets {a} feel heard and gives {b} the space to arrive.",
    ),
    (
        "K16",
        key(KeyDifferences).dimension(Repair).relation(Different).direction(BHigher),
        "{b} wants to repair sooner than {a} is ready to. Agreeing on a check-in time lets {b} feel heard and gives {a} the space to arrive.",
    ),
    // Loop
    (
        "L01",
        key(Loop).dimension(Engagement).relation(Different),
        "When a disagreement starts, one partner moves toward it and the other steps back. If A presses, B withdraws a little further, and the distance makes A press harder.",
    ),
    (
        "L02",
        key(Loop).dimension(Engagement).relation(VeryDifferent),
        "The classic pursue-and-withdraw loop: A pushes to settle things now, B shuts down to stay calm, and each move confirms the other's worst reading of the situation.",
    ),
    (
        "L03",
        key(Loop).dimension(Expression).relation(Different),
        "When feelings run high, A says more and B says less. The more A explains, the more B goes quiet, which A reads as not caring.",
    ),
    (
        "L04",
        key(Loop).dimension(Expression).relation(VeryDifferent),
        "A fills the silence with feelings while B goes still to cope. A hears indifference, B hears criticism, and both turn the volume further in their own direction.",
    ),
    (
        "L05",
        key(Loop).dimension(Reassurance).relation(Different),
        "When A asks for reassurance and B answers briefly, A asks again. B starts to feel tested, answers even more briefly, and the cycle tightens.",
    ),
    (
        "L06",
        key(Loop).dimension(Reassurance).relation(VeryDifferent),
        "A seeks constant confirmation while B needs it rarely. Each request feels like pressure to B, and each short reply feels like rejection to A.",
    ),
    (
        "L07",
        key(Loop).dimension(Repair).relation(Different),
        "After a conflict A reaches out to reconnect before B is ready. B holds back, A feels shut out, and the next reach is more urgent.",
    ),
    (
        "L08",
        key(Loop).dimension(Repair).relation(VeryDifferent),
        "A wants to make up right away, B needs real time apart. A's early attempts feel rushed to B, and B's distance feels like punishment to A.",
    ),
    // Felt experience
    (
        "F01",
        key(FeltExperience).dimension(Engagement).direction(AHigher),
        "For {a}, an unresolved issue feels urgent and lonely. For {b}, being asked to talk it through immediately can feel like being cornered.",
    ),
    (
        "F02",
        key(FeltExperience).dimension(Engagement).direction(BHigher),
        "For {b}, an unresolved issue feels urgent and lonely. For {a}, being asked to talk it through immediately can feel like being cornered.",
    ),
    (
        "F03",
        key(FeltExperience).dimension(Expression).direction(AHigher),
        "{a} may feel unseen when feelings are met with quiet. {b} may feel overwhelmed when emotions arrive all at once.",
    ),
    (
        "F04",
        key(FeltExperience).dimension(Expression).direction(BHigher),
        "{b} may feel unseen when feelings are met with quiet. {a} may feel overwhelmed when emotions arrive all at once.",
    ),
    (
        "F05",
        key(FeltExperience).dimension(Reassurance).direction(AHigher),
        "{a} can feel quietly anxious when reassurance is slow to come. {b} can feel that love is being questioned when asked for it often.",
    ),
    (
        "F06",
        key(FeltExperience).dimension(Reassurance).direction(BHigher),
        "{b} can feel quietly anxious when reassurance is slow to come. {a} can feel that love is being questioned when asked for it often.",
    ),
    (
        "F07",
        key(FeltExperience).dimension(Repair).direction(AHigher),
        "{a} may feel left hanging while the air stays tense. {b} may feel pushed to act fine before actually feeling fine.",
    ),
    (
        "F08",
        key(FeltExperience).dimension(Repair).direction(BHigher),
        "{b} may feel left hanging while the air stays tense. {a} may feel pushed to act fine before actually feeling fine.",
    ),
    // Triggers
    (
        "T01",
        key(Triggers).dimension(Engagement),
        "Watch for: one of you leaving the room mid-conversation, or one of you insisting on finishing it right now.",
    ),
    (
        "T02",
        key(Triggers).dimension(Expression),
        "Watch for: long silences after an emotional disclosure, or a sudden wave of feeling in the middle of a practical conversation.",
    ),
    (
        "T03",
        key(Triggers).dimension(Reassurance),
        "Watch for: unanswered messages, changed plans without explanation, and repeated questions about where things stand.",
    ),
    (
        "T04",
        key(Triggers).dimension(Repair),
        "Watch for: an apology that arrives before the other person is ready, or a cold stretch that goes on with no end in sight.",
    ),
    // Safety: standard per dimension
    (
        "S01",
        TemplateKey::dimension_safety(Engagement),
        "Agree on a pause signal that either of you can use, and a time to return to the topic. {a} and {b} both get what they need: space and a guaranteed follow-up.",
    ),
    (
        "S02",
        TemplateKey::dimension_safety(Expression),
        "Make room for both styles: {a} and {b} can take turns, with the quieter partner allowed to write thoughts down first.",
    ),
    (
        "S03",
        TemplateKey::dimension_safety(Reassurance),
        "Build small, regular reassurance rituals so {a} and {b} do not have to ask for it in the moment.",
    ),
    (
        "S04",
        TemplateKey::dimension_safety(Repair),
        "After a conflict, {a} and {b} can agree on a repair window: long enough to cool down, short enough that nobody feels abandoned.",
    ),
    // Safety: low-confidence per dimension
    (
        "S11",
        TemplateKey::low_confidence_safety(Engagement),
        "Some of the answers for {a} or {b} are missing, so read this comparison as a starting point. On conflict engagement, talk about how each of you likes to start hard conversations.",
    ),
    (
        "S12",
        TemplateKey::low_confidence_safety(Expression),
        "Some of the answers for {a} or {b} are missing, so read this comparison as a starting point. On emotional expression, share how each of you signals that something is wrong.",
    ),
    (
        "S13",
        TemplateKey::low_confidence_safety(Reassurance),
        "Some of the answers for {a} or {b} are missing, so read this comparison as a starting point. On reassurance, ask each other what helps when things feel uncertain.",
    ),
    (
        "S14",
        TemplateKey::low_confidence_safety(Repair),
        "Some of the answers for {a} or {b} are missing, so read this comparison as a starting point. On repair, compare how long each of you usually needs after a disagreement.",
    ),
    // Safety: global very-low confidence
    (
        "S21",
        TemplateKey::very_low_confidence(Incomplete),
        "There is not enough information from {a} and {b} to compare most dimensions yet. Completing the remaining questions will make this picture much more reliable.",
    ),
    (
        "S22",
        TemplateKey::very_low_confidence(SeverelyIncomplete),
        "Almost none of the dimensions could be compared for {a} and {b}. Treat anything below as general guidance and finish the questionnaire together for a real comparison.",
    ),
    // Absolute fallback
    (
        "A99",
        TemplateKey::GLOBAL_SAFETY,
        "Every pair has differences. {a} and {b} can keep conversations safe by slowing down, checking what the other meant, and agreeing to come back to hard topics.",
    ),
];

pub(super) fn standard_templates() -> Vec<Template> {
    STANDARD_TEMPLATES
        .iter()
        .map(|(id, key, text)| Template::new(*id, *key, *text))
        .collect()
}
