use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;

pub struct HelpCommand;

impl BotCommand for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Prints this message"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, _args: &[String]) {
        let mut msg = String::new();
        msg.push_str(" × info\t\t: Print my current status and list active group chats\n");
        msg.push_str(" × id\t\t: Print my ID\n");
        msg.push_str(" × invite\t\t: Request invite to default group chat\n");
        msg.push_str(
            " × invite <n> <p>\t: Request invite to group chat n (with Password if protected)\n",
        );
        msg.push_str(
            " × group <t> <p>\t: Creates a new groupchat with Type: text | audio (optional Password)",
        );
        ctx.src.reply(msg);

        if !ctx.is_master() {
            return;
        }

        let mut msg = String::from("Master Commands:\n");
        msg.push_str(" × default <n>\t\t: Sets default groupchat room to n\n");
        msg.push_str(" × gmessage <n> <msg>\t: Sends msg to groupchat n\n");
        msg.push_str(" × leave <n>\t\t: Leaves groupchat n\n");
        msg.push_str(" × master <id>\t\t: Adds ID to the masterkeys file\n");
        msg.push_str(" × name <name>\t\t: Sets name\n");
        msg.push_str(
            " × passwd <n> <pass>\t\t: Sets password for groupchat n (leave pass blank for no password)\n",
        );
        msg.push_str(
            " × purge <n>\t\t: Sets the number of days before an inactive friend is deleted\n",
        );
        msg.push_str(" × status <s>\t\t: Sets status (online, busy or away)\n");
        msg.push_str(" × statusmessage <msg>\t: Sets status message\n");
        msg.push_str(" × title <n> <msg>\t\t: Sets title for groupchat n");
        ctx.src.reply(msg);
    }
}
