use crate::holland::domain::{ExamGroup, HollandCode, Major, Question, QuestionId};
use crate::holland::domain::HollandCode::{
    Artistic, Conventional, Enterprising, Investigative, Realistic, Social,
};

const QUESTIONS: [(QuestionId, &str, HollandCode); 60] = [
    (1, "Buy the parts and assemble a computer of your own design", Realistic),
    (2, "Put together a wardrobe by following a video guide", Realistic),
    (3, "Do make-up for yourself or a friend by following a video guide", Realistic),
    (4, "Prune and shape ornamental plants", Realistic),
    (5, "Take apart a phone or computer to see how it works", Realistic),
    (6, "Join an expedition exploring caves, mountains or forests", Realistic),
    (7, "Look after pets", Realistic),
    (8, "Repair a bicycle or motorbike", Realistic),
    (9, "Build furniture", Realistic),
    (10, "Play a sport", Realistic),
    (11, "Introduce two of your friends to each other", Social),
    (12, "Take part in Earth Day by picking up litter or switching off lights", Social),
    (13, "Show foreign visitors where to find good food", Social),
    (14, "Rescue an abandoned animal from the street", Social),
    (15, "Tell jokes to your friends", Social),
    (16, "Teach children a game or a sport", Social),
    (17, "Listen to friends talk about their problems", Social),
    (18, "Help friends sort out relationship troubles", Social),
    (19, "Join a charity trip", Social),
    (20, "Offer help to teachers or classmates when they need it", Social),
    (21, "Visit a technology museum", Investigative),
    (22, "Learn how stars are formed", Investigative),
    (23, "Study the culture of a country you like", Investigative),
    (24, "Learn about human psychology", Investigative),
    (25, "Read a book about the future of humanity a million years from now", Investigative),
    (26, "Read articles or watch videos about the universe", Investigative),
    (27, "Find out how an epidemic started", Investigative),
    (28, "Read articles about how AI will affect future careers", Investigative),
    (29, "Watch videos about the animal world", Investigative),
    (30, "Carry out a chemistry experiment", Investigative),
    (31, "Paint a picture", Artistic),
    (32, "Write a short story", Artistic),
    (33, "Play a musical instrument", Artistic),
    (34, "Edit a film", Artistic),
    (35, "Design a poster for an event", Artistic),
    (36, "Draw an animated cartoon", Artistic),
    (37, "Sing in a band", Artistic),
    (38, "Perform modern dance", Artistic),
    (39, "Host an event as the MC", Artistic),
    (40, "Write a script for a film or TV show", Artistic),
    (41, "Serve as a class officer", Enterprising),
    (42, "Take a course on managing money", Enterprising),
    (43, "Attend a leadership camp for teenagers", Enterprising),
    (44, "Plan the work of your team members", Enterprising),
    (45, "Earn money by selling online", Enterprising),
    (46, "Speak in front of a crowd about a topic you like", Enterprising),
    (47, "Help draw up new rules for your class or school", Enterprising),
    (48, "Persuade your parents to go along with your ideas", Enterprising),
    (49, "Organise an outing for a group of friends", Enterprising),
    (50, "Earn money from a part-time job", Enterprising),
    (51, "Draw up a monthly spending plan", Conventional),
    (52, "Prepare the budget for a class trip", Conventional),
    (53, "Plan your summer or new-year holiday", Conventional),
    (54, "Count and sort money", Conventional),
    (55, "Tidy up your desk, wardrobe or home", Conventional),
    (56, "Write a study plan for the new semester", Conventional),
    (57, "Finish assignments by their deadline", Conventional),
    (58, "Proofread the subtitles of a favourite film", Conventional),
    (59, "Act as class treasurer", Conventional),
    (60, "Help your parents manage the household shopping budget", Conventional),
];

struct MajorSeed {
    id: &'static str,
    name: &'static str,
    groups: &'static [&'static str],
    codes: &'static [HollandCode],
    description: &'static str,
}

const fn seed(
    id: &'static str,
    name: &'static str,
    groups: &'static [&'static str],
    codes: &'static [HollandCode],
    description: &'static str,
) -> MajorSeed {
    MajorSeed {
        id,
        name,
        groups,
        codes,
        description,
    }
}

const MAJORS: [MajorSeed; 30] = [
    seed("1", "Information Technology", &["A00", "A01"], &[Investigative, Realistic],
        "Needs logical thinking and a good grasp of technology."),
    seed("2", "Data Science and AI", &["A00", "A01"], &[Investigative, Conventional],
        "A young field with high salaries and many international opportunities."),
    seed("3", "Medicine", &["B00"], &[Social, Investigative],
        "Demands patience, care for others and research."),
    seed("4", "Pharmacy", &["B00"], &[Investigative, Conventional],
        "Suits meticulous students who enjoy research."),
    seed("5", "Nursing", &["B00", "C00"], &[Social, Conventional],
        "Needs empathy and a wish to care for people."),
    seed("6", "Law", &["C00", "D01"], &[Enterprising, Conventional],
        "Suits students who enjoy debating and persuading."),
    seed("7", "Economics", &["A00", "A01"], &[Conventional, Enterprising],
        "Quick, outgoing and logical."),
    seed("8", "Business Administration", &["A00", "A01"], &[Enterprising, Conventional],
        "A popular field leaning towards leadership."),
    seed("9", "Finance and Banking", &["A00", "A01"], &[Conventional, Enterprising],
        "Requires comfort with numbers and communication."),
    seed("10", "Accounting and Auditing", &["A00", "A01"], &[Conventional, Realistic],
        "Needs care and precise work."),
    seed("11", "Marketing", &["A00", "A01"], &[Enterprising, Artistic],
        "An in-demand field mixing creativity and analysis."),
    seed("12", "E-commerce", &["A00", "A01"], &[Enterprising, Investigative],
        "Combines information technology with business."),
    seed("13", "English Language", &["D01"], &[Social, Enterprising],
        "Opens doors to study and work abroad."),
    seed("14", "Chinese Language", &["D01", "D04"], &[Social, Enterprising],
        "In demand thanks to growing economic cooperation."),
    seed("15", "International Relations", &["D01", "C00"], &[Enterprising, Social],
        "Suits outgoing students drawn to diplomacy."),
    seed("16", "Journalism and Media", &["C00", "D01"], &[Artistic, Social],
        "Needs creativity, communication and quick reactions."),
    seed("17", "Psychology", &["B00", "D01"], &[Social, Investigative],
        "Suits students who care about people and listen well."),
    seed("18", "Primary Education", &["C00", "D01"], &[Social, Artistic],
        "Needs warmth and patience."),
    seed("19", "Mathematics Education", &["A00", "A01"], &[Social, Investigative],
        "Suits students who love mathematics."),
    seed("20", "Architecture", &["V00", "H00", "H01"], &[Artistic, Realistic],
        "Needs spatial thinking and creativity."),
    seed("21", "Graphic Design", &["H00", "H01", "D01"], &[Artistic, Social],
        "Suits students who enjoy art and technology."),
    seed("22", "Mechanical Engineering Technology", &["A00", "A01"], &[Realistic, Investigative],
        "Needs practical and technical skills."),
    seed("23", "Electrical and Electronic Engineering Technology", &["A00", "A01"],
        &[Realistic, Investigative],
        "Widely applied with good job prospects."),
    seed("24", "Biotechnology", &["B00", "A00"], &[Investigative, Realistic],
        "Applied research across medicine, agriculture and food."),
    seed("25", "High-tech Agriculture", &["B00", "A00"], &[Realistic, Investigative],
        "A sustainable field with room for start-ups."),
    seed("26", "Environmental Science", &["B00", "A00"], &[Investigative, Realistic, Social],
        "A green field with strong future demand."),
    seed("27", "Logistics and Supply Chain Management", &["A00", "A01", "D01"], &[],
        "A global field that needs good English."),
    seed("28", "Tourism and Hospitality", &["D01", "C00"], &[Social, Enterprising],
        "Needs communication, service and an outgoing personality."),
    seed("29", "Aviation (Management, Pilot)", &["A00", "A01", "D01"], &[Realistic, Conventional],
        "An in-demand field requiring foreign languages and good health."),
    seed("30", "Police and Military", &["A00", "C00", "D01"], &[Conventional, Enterprising],
        "Needs fitness, discipline and responsibility."),
];

const EXAM_GROUPS: [(&str, [&str; 3]); 20] = [
    ("A00", ["Maths", "Physics", "Chemistry"]),
    ("A01", ["Maths", "Physics", "English"]),
    ("B00", ["Maths", "Chemistry", "Biology"]),
    ("C00", ["Literature", "History", "Geography"]),
    ("C01", ["Literature", "Maths", "Physics"]),
    ("C03", ["Literature", "Maths", "History"]),
    ("C08", ["Literature", "Chemistry", "Biology"]),
    ("C14", ["Literature", "Maths", "Civics"]),
    ("D01", ["Maths", "Literature", "English"]),
    ("D07", ["Maths", "Chemistry", "English"]),
    ("D08", ["Maths", "Biology", "English"]),
    ("D09", ["Maths", "History", "English"]),
    ("D14", ["Literature", "History", "English"]),
    ("D15", ["Literature", "Geography", "English"]),
    ("D17", ["Maths", "Geography", "English"]),
    ("H00", ["Literature", "Drawing Aptitude", "Figure Drawing"]),
    ("H01", ["Maths", "Literature", "Drawing Aptitude"]),
    ("R00", ["Vocal Performance 1", "Vocal Performance 2", "Literature"]),
    ("V00", ["Maths", "Physics", "Drawing Aptitude"]),
    ("V01", ["Maths", "Literature", "Drawing Aptitude"]),
];

pub(super) fn questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|&(id, text, category)| Question {
            id,
            text: text.to_string(),
            category,
        })
        .collect()
}

pub(super) fn majors() -> Vec<Major> {
    MAJORS
        .iter()
        .map(|seed| Major {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            exam_groups: seed.groups.iter().map(|group| group.to_string()).collect(),
            categories: seed.codes.to_vec(),
            characteristics: None,
        })
        .collect()
}

pub(super) fn exam_groups() -> Vec<ExamGroup> {
    EXAM_GROUPS
        .iter()
        .map(|(code, subjects)| ExamGroup {
            code: code.to_string(),
            name: format!("Group {code} ({})", subjects.join(", ")),
            subjects: subjects.iter().map(|subject| subject.to_string()).collect(),
            description: None,
        })
        .collect()
}
