use crate::story::graph::StoryGraph;
use crate::story::node::{Choice, Ending, NodeKind, StoryNode};

fn choice(label: &str, target: &str) -> Choice {
    Choice {
        label: label.into(),
        target: target.into(),
    }
}

// ---------------------------------------------------------------------------
// The Enchanted Forest adventure
// ---------------------------------------------------------------------------

/// The complete shipped story: 6 decision points and 13 endings.
pub fn enchanted_forest() -> StoryGraph {
    let nodes = vec![
        StoryNode {
            id: "start".into(),
            text: "You find yourself standing at the edge of an ancient, mystical forest. \
                   The trees tower above you, their branches forming a canopy so thick that \
                   only scattered beams of sunlight reach the forest floor. You hear the \
                   distant sound of running water and the occasional bird call. A worn path \
                   leads deeper into the forest, while to your right you notice what appears \
                   to be an old, abandoned cottage."
                .into(),
            kind: NodeKind::Decision(vec![
                choice("Follow the path deeper into the forest", "forest_path"),
                choice("Investigate the abandoned cottage", "cottage"),
                choice("Look for another way around the forest", "around_forest"),
            ]),
        },
        StoryNode {
            id: "forest_path".into(),
            text: "You venture down the winding forest path. The deeper you go, the more \
                   magical the forest becomes. Glowing mushrooms light your way, and you \
                   can hear whispered conversations in languages you don't recognize. \
                   Suddenly, you come to a fork in the path. The left path seems to lead \
                   uphill toward what might be ruins, while the right path descends toward \
                   the sound of flowing water."
                .into(),
            kind: NodeKind::Decision(vec![
                choice("Take the left path toward the ruins", "ruins"),
                choice("Take the right path toward the water", "river"),
                choice("Try to climb a tree to get a better view", "tree_climb"),
            ]),
        },
        StoryNode {
            id: "cottage".into(),
            text: "You approach the cottage cautiously. It's clearly been abandoned for years, \
                   with ivy covering most of the walls and several broken windows. However, \
                   you notice smoke rising from the chimney. As you get closer, you hear \
                   movement inside. The front door is slightly ajar, and you can see a warm \
                   glow coming from within."
                .into(),
            kind: NodeKind::Decision(vec![
                choice("Knock on the door politely", "cottage_knock"),
                choice("Sneak around to peek through a window", "cottage_peek"),
                choice("Call out a greeting from a safe distance", "cottage_greeting"),
            ]),
        },
        StoryNode {
            id: "around_forest".into(),
            text: "You decide to skirt around the edge of the forest, looking for an easier \
                   route. After walking for what feels like hours, you discover that the \
                   forest is much larger than you initially thought. However, your detour \
                   leads you to a beautiful meadow filled with wildflowers. In the center \
                   of the meadow stands an ancient stone circle with symbols carved into \
                   each stone."
                .into(),
            kind: NodeKind::Decision(vec![
                choice("Enter the stone circle", "stone_circle"),
                choice("Examine the symbols more closely", "examine_symbols"),
                choice("Rest in the meadow and enjoy the peaceful moment", "rest_meadow"),
            ]),
        },
        StoryNode {
            id: "ruins".into(),
            text: "The path leads you to the crumbling remains of what was once a magnificent \
                   castle. Moss and vines have reclaimed much of the structure, but you can \
                   still see intricate carvings on some of the remaining walls. As you explore, \
                   you discover a spiral staircase leading down into darkness. You also notice \
                   a tower that, while damaged, still appears to be climbable."
                .into(),
            kind: NodeKind::Decision(vec![
                choice("Descend the spiral staircase", "dungeon"),
                choice("Climb the tower", "tower"),
                choice("Search the main ruins for artifacts", "search_ruins"),
            ]),
        },
        StoryNode {
            id: "river".into(),
            text: "You follow the path to a crystal-clear river that sparkles in the dappled \
                   sunlight. The water is so clear you can see colorful fish swimming below. \
                   On the far bank, you notice what appears to be a small village. A rickety \
                   wooden bridge spans the river, but it looks rather unstable. You also \
                   notice some large stepping stones that might provide a safer crossing."
                .into(),
            kind: NodeKind::Decision(vec![
                choice("Cross the rickety bridge carefully", "bridge_cross"),
                choice("Use the stepping stones", "stones_cross"),
                choice("Follow the river to look for a better crossing", "river_follow"),
            ]),
        },
        // --- Endings reached from the forest path ---
        StoryNode {
            id: "tree_climb".into(),
            text: "You choose a sturdy-looking tree and begin to climb. The bark is rough \
                   but provides good grip, and soon you're high above the forest floor. \
                   From your vantage point, you can see the entire forest spread out below \
                   you. You spot the ruins, the river, a village, and something unexpected: \
                   a clearing where several robed figures appear to be conducting some kind \
                   of ceremony around a glowing object."
                .into(),
            kind: NodeKind::Terminal(Ending::Wisdom),
        },
        // --- Endings reached from the cottage ---
        StoryNode {
            id: "cottage_knock".into(),
            text: "You knock gently on the cottage door. After a moment, it opens to reveal \
                   a kind-looking elderly woman with twinkling eyes. 'Oh my dear,' she says, \
                   'I've been expecting you! I'm the Forest Guardian, and I have something \
                   that belongs to you.' She hands you a small, glowing amulet. 'This will \
                   protect you on your journey. The forest can be dangerous for those who \
                   don't understand its ways.'"
                .into(),
            kind: NodeKind::Terminal(Ending::Victory),
        },
        StoryNode {
            id: "cottage_peek".into(),
            text: "You sneak around to peer through a cracked window. Inside, you see the \
                   elderly woman stirring a large cauldron. Suddenly, she looks up and makes \
                   direct eye contact with you through the window. 'Manners, young one!' she \
                   calls out. You feel embarrassed but she smiles. 'Come in through the front \
                   door like a civilized person.' Despite your awkward introduction, she \
                   welcomes you warmly and shares her wisdom about the forest."
                .into(),
            kind: NodeKind::Terminal(Ending::Wisdom),
        },
        StoryNode {
            id: "cottage_greeting".into(),
            text: "You call out a friendly greeting from a respectful distance. The door \
                   opens and a woman emerges, but something seems off. Her eyes glow with \
                   an unnatural light, and when she speaks, her voice echoes strangely. \
                   'You are wise to keep your distance, traveler. I am bound to this place \
                   by an ancient curse. Leave now, before the curse spreads to you as well.' \
                   You realize you've encountered a trapped spirit and quickly retreat."
                .into(),
            kind: NodeKind::Terminal(Ending::Mystery),
        },
        // --- Endings reached from the meadow ---
        StoryNode {
            id: "stone_circle".into(),
            text: "As you step into the center of the stone circle, the symbols begin to \
                   glow with a soft, blue light. You feel a surge of ancient power flowing \
                   through you. Visions flash before your eyes - you see the history of \
                   this place, understand the magic that flows through the land, and realize \
                   that you are the chosen guardian of this sacred site. You have found your \
                   true destiny."
                .into(),
            kind: NodeKind::Terminal(Ending::Victory),
        },
        StoryNode {
            id: "examine_symbols".into(),
            text: "You spend time carefully studying each symbol carved into the ancient \
                   stones. As you trace them with your finger, knowledge flows into your \
                   mind. You learn about the ancient civilization that once thrived here, \
                   their connection to nature, and their secrets of harmony with the forest. \
                   You leave the circle much wiser than when you entered."
                .into(),
            kind: NodeKind::Terminal(Ending::Wisdom),
        },
        StoryNode {
            id: "rest_meadow".into(),
            text: "You lie down in the soft grass among the wildflowers and gaze up at the \
                   clouds drifting across the blue sky. For the first time in a long while, \
                   you feel completely at peace. The stress and worries of your everyday \
                   life seem to melt away. Sometimes the greatest adventure is simply \
                   learning to appreciate the beauty that surrounds us."
                .into(),
            kind: NodeKind::Terminal(Ending::Wisdom),
        },
        // --- Endings reached from the ruins ---
        StoryNode {
            id: "dungeon".into(),
            text: "The spiral staircase leads you deep underground to a vast chamber filled \
                   with ancient treasures. However, as you step forward to examine them, \
                   you trigger an ancient trap. The entrance seals behind you, but you \
                   discover a hidden passage that leads to an underground river and \
                   eventually to freedom, along with a small bag of gold coins."
                .into(),
            kind: NodeKind::Terminal(Ending::Victory),
        },
        StoryNode {
            id: "tower".into(),
            text: "You climb the damaged tower carefully, testing each step. At the top, \
                   you find a powerful telescope that shows you visions of distant lands \
                   and times. You see possible futures and understand that your choices \
                   here will ripple through time. The knowledge is overwhelming, and you \
                   carefully climb down, forever changed by what you've seen."
                .into(),
            kind: NodeKind::Terminal(Ending::Wisdom),
        },
        StoryNode {
            id: "search_ruins".into(),
            text: "While searching through the ruins, you accidentally awaken an ancient \
                   guardian spirit. It's not hostile, but it's confused and lost. You \
                   spend time helping it remember its purpose and find peace. In gratitude, \
                   it bestows upon you a blessing of protection before finally moving on \
                   to its eternal rest."
                .into(),
            kind: NodeKind::Terminal(Ending::Victory),
        },
        // --- Endings reached from the river ---
        StoryNode {
            id: "bridge_cross".into(),
            text: "You carefully cross the rickety bridge, but halfway across, some planks \
                   give way! You manage to grab onto the rope railing and pull yourself to \
                   safety, but the experience leaves you shaken. The villagers on the other \
                   side help you recover and share stories of other brave travelers who \
                   have made this dangerous crossing."
                .into(),
            kind: NodeKind::Terminal(Ending::Victory),
        },
        StoryNode {
            id: "stones_cross".into(),
            text: "You hop carefully from stone to stone across the river. The crossing \
                   is easier than expected, and you enjoy the challenge. Halfway across, \
                   you notice beautiful water flowers growing between the stones. You \
                   arrive at the village refreshed and welcomed by the friendly locals \
                   who invite you to stay for their harvest festival."
                .into(),
            kind: NodeKind::Terminal(Ending::Victory),
        },
        StoryNode {
            id: "river_follow".into(),
            text: "You follow the river for miles, enjoying the peaceful sound of flowing \
                   water and discovering many beautiful sights along the way. Eventually, \
                   you find a natural ford where the water is shallow enough to cross \
                   safely. Your patient approach rewards you with a safe journey and \
                   beautiful memories of your time by the river."
                .into(),
            kind: NodeKind::Terminal(Ending::Wisdom),
        },
    ];

    StoryGraph::from_nodes("start", nodes)
}
